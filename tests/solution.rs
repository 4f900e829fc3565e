use otter_sls::{
    config::{Algorithm, Config},
    context::Context,
    io::solution::read_solution,
    reports::Report,
};

mod solution {
    use super::*;

    #[test]
    fn round_trip() {
        let formula = "
r1c1 r1c2
-r1c1 -r1c2
r2c1 r2c2
-r2c1 -r2c2
-r1c1 -r2c1
-r1c2 -r2c2
r1c1
";
        let mut config = Config::default();
        config.algorithm.value = Algorithm::AgingWalkSAT;
        let mut the_context = Context::from_config(config);
        assert!(the_context.read_lines(formula.as_bytes()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let mut buffer = Vec::default();
        assert!(the_context.write_solution(&mut buffer).is_ok());
        assert_eq!(
            String::from_utf8_lossy(&buffer),
            "r1c1\n-r1c2\n-r2c1\nr2c2\n"
        );

        let valuation = read_solution(&the_context.formula, buffer.as_slice()).unwrap();
        assert_eq!(valuation, the_context.valuation);
    }

    #[test]
    fn file_round_trip() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.read_lines("p q\n-p\n".as_bytes()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let path = std::env::temp_dir().join("otter_sls_file_round_trip.sol");
        let file = std::fs::File::create(&path).unwrap();
        assert!(the_context.write_solution(std::io::BufWriter::new(file)).is_ok());

        let file = std::fs::File::open(&path).unwrap();
        let valuation =
            read_solution(&the_context.formula, std::io::BufReader::new(file)).unwrap();
        assert_eq!(valuation, vec![false, true]);

        let _ = std::fs::remove_file(path);
    }
}
