//! End-to-end validation tests: every fatal configuration error must abort
//! the reload with no image escaping.
//!
//! ```bash
//! cargo test -p parallax-tests --test e2e_validation
//! ```

use parallax_render::generate::{GenerateError, Generator};
use parallax_spec::SpecError;
use parallax_tests::TestHarness;

fn reload_err(config: &str) -> GenerateError {
    let harness = TestHarness::new();
    let path = harness.write_config("layers.toml", config);
    Generator::new(&path).full_reload(32, 32).unwrap_err()
}

#[test]
fn unknown_layer_type_is_fatal() {
    let err = reload_err("[[layers]]\ntype = \"sprite\"\n");
    assert!(matches!(err, GenerateError::Spec(SpecError::Parse(_))));
}

#[test]
fn unknown_blend_factor_is_fatal() {
    let err = reload_err("[[layers]]\ntype = \"noise\"\nsrc_factor = \"screen\"\n");
    assert!(matches!(err, GenerateError::Spec(SpecError::Parse(_))));
}

#[test]
fn unknown_noise_kind_is_fatal() {
    let err = reload_err("[[layers]]\ntype = \"noise\"\nnoise_kind = \"simplex\"\n");
    assert!(matches!(err, GenerateError::Spec(SpecError::Parse(_))));
}

#[test]
fn missing_config_file_is_fatal() {
    let harness = TestHarness::new();
    let generator = Generator::new(harness.path().join("absent.toml"));
    let err = generator.full_reload(32, 32).unwrap_err();
    assert!(matches!(err, GenerateError::Spec(SpecError::Io(_))));
}

#[test]
fn excessive_octaves_rejected_before_any_sampling() {
    let err = reload_err("[[layers]]\ntype = \"noise\"\noctaves = 33\n");
    assert!(matches!(err, GenerateError::Noise(_)));
}

#[test]
fn mask_octaves_rejected_through_the_full_pipeline() {
    let config = "[[layers]]\ntype = \"points\"\nmasked = true\nmask_octaves = 64\n";
    assert!(matches!(reload_err(config), GenerateError::Noise(_)));
}

#[test]
fn threshold_of_one_is_fatal() {
    let err = reload_err("[[layers]]\ntype = \"noise\"\nthreshold = 1.0\n");
    assert!(matches!(err, GenerateError::InvalidParameter(_)));
}

#[test]
fn malformed_hex_color_is_fatal() {
    let err = reload_err("[[layers]]\ntype = \"points\"\nclose_color = \"#12345\"\n");
    assert!(matches!(err, GenerateError::Color(_)));
}

#[test]
fn bad_layer_anywhere_in_the_stack_aborts_the_whole_reload() {
    let config = r#"
        [[layers]]
        type = "noise"
        seed = 1

        [[layers]]
        type = "points"
        point_size = 0
    "#;
    assert!(matches!(
        reload_err(config),
        GenerateError::InvalidParameter(_)
    ));
}
