//! Tests for algorithm names, parsing and method dispatch

#[cfg(test)]
mod tests {
    use retrodither::DitherError;
    use retrodither::pipeline::{Algorithm, Method};

    // Tests every algorithm parses back from its stable name
    #[test]
    fn test_name_round_trip() {
        for algorithm in Algorithm::ALL {
            let parsed: Result<Algorithm, _> = algorithm.name().parse();
            assert!(matches!(parsed, Ok(a) if a == algorithm), "{algorithm}");
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    // Tests the published stable names
    #[test]
    fn test_stable_names() {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec![
                "atkinson",
                "floyd-steinberg",
                "stucki",
                "burkes",
                "sierra",
                "bayer4x4",
                "grayscale"
            ]
        );
    }

    // Tests names match exactly, with no case folding or aliases
    // Verified by comparing names case-insensitively
    #[test]
    fn test_unknown_and_miscased_names_fail() {
        for name in ["Atkinson", "floyd_steinberg", "bayer", "", "jarvis"] {
            let parsed = name.parse::<Algorithm>();
            assert!(
                matches!(&parsed, Err(DitherError::UnknownAlgorithm { name: n }) if n == name),
                "'{name}' should not parse"
            );
        }
    }

    // Tests each algorithm dispatches to the expected method
    #[test]
    fn test_method_table() {
        assert_eq!(Algorithm::Grayscale.method(), Method::Grayscale);
        assert!(matches!(Algorithm::Bayer4x4.method(), Method::Ordered(_)));

        let kernel_names: Vec<&str> = Algorithm::ALL
            .iter()
            .filter_map(|a| match a.method() {
                Method::Diffusion(kernel) => Some(kernel.name),
                Method::Grayscale | Method::Ordered(_) => None,
            })
            .collect();
        assert_eq!(
            kernel_names,
            vec!["Atkinson", "Floyd-Steinberg", "Stucki", "Burkes", "Sierra"]
        );
    }

    // Tests only grayscale keeps the full tonal range
    #[test]
    fn test_is_binary() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.is_binary(), algorithm != Algorithm::Grayscale);
        }
        assert_eq!(Algorithm::default(), Algorithm::Atkinson);
    }
}
