mod test_generator {
    use itamaraca::{ItamaracaRng, SeedError};

    #[test]
    fn test_reference_sequence_prefix() {
        let mut rng = ItamaracaRng::new(10000.0, &[800.0, 25.0, 3005.0], 1.97).unwrap();
        let values: Vec<String> = rng.sample(5).iter().map(|v| format!("{:.4}", v)).collect();

        assert_eq!(
            values,
            ["5656.1500", "1093.3655", "6234.0800", "8861.4778", "5303.1813"]
        );
    }

    #[test]
    fn test_wrong_seed_count_is_typed() {
        let result = ItamaracaRng::new(10000.0, &[800.0, 25.0], 1.97);
        assert!(matches!(result, Err(SeedError::InvalidSeedCount { found: 2 })));
    }
}

mod test_simulation {
    use itamaraca::{Simulation, SimulationConfig};
    use std::path::PathBuf;

    fn temp_csv(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("itamaraca-{}-{}.csv", name, std::process::id()))
    }

    #[test]
    fn test_run_to_file() {
        let path = temp_csv("run");
        std::fs::write(&path, "stale contents\n").unwrap();

        let config = SimulationConfig {
            samples: 1000,
            output: path.clone(),
            ..SimulationConfig::default()
        };
        let report = Simulation::new(config).run_to_file().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(report.samples, 1000);
        assert_eq!(lines.len(), 1001);
        assert_eq!(lines[0], "Index,Value");
        assert_eq!(lines[1], "0,5656.1500");
        assert_eq!(lines[1000].split(',').next(), Some("999"));
        assert!(!text.contains("stale"));

        for line in &lines[1..] {
            let value = line.split(',').nth(1).unwrap();
            let (_, decimals) = value.split_once('.').unwrap();
            assert_eq!(decimals.len(), 4);
            assert!(value.parse::<f64>().unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let config = SimulationConfig {
            samples: 2000,
            ..SimulationConfig::default()
        };
        let (_, a) = Simulation::new(config.clone()).run_to_writer(Vec::new()).unwrap();
        let (_, b) = Simulation::new(config).run_to_writer(Vec::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bad_seeds_leave_no_file() {
        let path = temp_csv("bad-seeds");
        let _ = std::fs::remove_file(&path);

        let config = SimulationConfig {
            seeds: vec![1.0, 2.0, 3.0, 4.0],
            output: path.clone(),
            ..SimulationConfig::default()
        };
        let err = Simulation::new(config).run_to_file().unwrap_err();

        assert!(format!("{:#}", err).contains("exactly 3 seeds"));
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let config = SimulationConfig {
            samples: 10,
            output: PathBuf::from("/nonexistent-dir/itamaraca_results.csv"),
            ..SimulationConfig::default()
        };
        let err = Simulation::new(config).run_to_file().unwrap_err();
        assert!(err.to_string().contains("failed to create output file"));
    }
}
