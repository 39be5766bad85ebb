// tests/pipeline.rs
//
// End-to-end coverage of the UI-boundary path: raw text fields in,
// expanded string plus primitive stream out.
use lsys_canvas::{
    CommandList, GenerateError, InterpreterConfig, ParamError, RenderParameters, RuleTable,
    TurtleInterpreter, defaults,
};

#[test]
fn test_default_fields_generate_the_bush() {
    let rules: RuleTable = defaults::RULES.parse().unwrap();
    let p = RenderParameters {
        iterations: 1,
        ..Default::default()
    };
    let mut surface = CommandList::new();
    let instructions = TurtleInterpreter::default()
        .generate(defaults::AXIOM, &rules, &p, &mut surface)
        .unwrap();

    assert_eq!(instructions, "F[+F]F[-F]F");
    // 5 drawn segments, and the one terminal flush.
    assert_eq!(surface.segment_ends().count(), 5);
    assert_eq!(
        surface
            .commands
            .iter()
            .filter(|c| matches!(c, lsys_canvas::DrawCommand::Flush))
            .count(),
        1
    );
}

#[test]
fn test_instruction_cap_aborts_before_rendering() {
    let config = InterpreterConfig {
        max_instructions: Some(100),
        ..Default::default()
    };
    let rules: RuleTable = defaults::RULES.parse().unwrap();
    let p = RenderParameters::default(); // 4 iterations: 625 F's and change
    let mut surface = CommandList::new();
    let err = TurtleInterpreter::new(config)
        .generate(defaults::AXIOM, &rules, &p, &mut surface)
        .unwrap_err();

    assert!(matches!(err, GenerateError::Expand(_)));
    // Nothing was emitted: the cap trips before the surface is touched.
    assert!(surface.is_empty());
}

#[test]
fn test_parameters_parse_with_whitespace() {
    let p = RenderParameters::parse(" 25 ", "4", "5.5").unwrap();
    assert_eq!(p.angle_deg, 25.0);
    assert_eq!(p.iterations, 4);
    assert_eq!(p.step, 5.5);
}

#[test]
fn test_parameters_reject_bad_fields() {
    assert_eq!(
        RenderParameters::parse("up", "4", "5").unwrap_err(),
        ParamError::InvalidAngle { input: "up".into() }
    );
    assert_eq!(
        RenderParameters::parse("25", "-1", "5").unwrap_err(),
        ParamError::InvalidIterations { input: "-1".into() }
    );
    assert_eq!(
        RenderParameters::parse("25", "4", "NaN").unwrap_err(),
        ParamError::InvalidStep { input: "NaN".into() }
    );
}

#[test]
fn test_zero_iterations_draws_the_axiom() {
    let rules: RuleTable = defaults::RULES.parse().unwrap();
    let p = RenderParameters {
        iterations: 0,
        ..Default::default()
    };
    let mut surface = CommandList::new();
    let instructions = TurtleInterpreter::default()
        .generate("F", &rules, &p, &mut surface)
        .unwrap();
    assert_eq!(instructions, "F");
    assert_eq!(surface.segment_ends().count(), 1);
}
