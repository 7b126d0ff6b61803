//! Integration tests for fontpaint-path crate.

use fontpaint_path::{
    DrawCommand, PathInstruction, bounding_rect, invert_y, parse, serialize, to_draw_commands,
};

const SAMPLE: &str = "M124 570v22q0,392,152,665.5t344 354.5";

#[test]
fn test_parse_empty_string() {
    let result = parse("", false).unwrap();
    assert!(result.is_empty(), "Empty path data should yield no instructions");
}

#[test]
fn test_parse_sample_commands() {
    let result = parse(SAMPLE, false).unwrap();
    assert_eq!(result.len(), 4);
    let letters: Vec<char> = result.iter().map(|i| i.command.letter()).collect();
    assert_eq!(letters, vec!['M', 'v', 'q', 't']);
}

#[test]
fn test_parse_sample_params() {
    let result = parse(SAMPLE, false).unwrap();
    assert_eq!(result[0].params, vec![124.0, 570.0]);
    assert_eq!(result[1].params, vec![22.0]);
    assert_eq!(result[2].params, vec![0.0, 392.0, 152.0, 665.5]);
    assert_eq!(result[3].params, vec![344.0, 354.5]);
}

#[test]
fn test_parse_sample_inverted() {
    let result = parse(SAMPLE, true).unwrap();
    assert_eq!(result[0].params, vec![124.0, -570.0]);
    assert_eq!(result[1].params, vec![-22.0]);
    assert_eq!(result[2].params, vec![0.0, -392.0, 152.0, -665.5]);
    assert_eq!(result[3].params, vec![344.0, -354.5]);
}

#[test]
fn test_serialize_exact_output() {
    let instructions = vec![
        PathInstruction::new('M', vec![5.0, 2.0]).unwrap(),
        PathInstruction::new('q', vec![0.0, 372.0, 784.0, 62.4]).unwrap(),
    ];
    assert_eq!(serialize(&instructions), "M5 2q0 372 784 62.4");
}

#[test]
fn test_parse_serialize_parse_is_stable() {
    let sources = [
        SAMPLE,
        "M0 0C10,20,30,40,50,60s1-2-3-4Z",
        "m.5.5h10v10H-3.25z",
    ];
    for source in sources {
        let first = parse(source, false).unwrap();
        let again = parse(&serialize(&first), false).unwrap();
        assert_eq!(first, again, "round trip changed structure of {source}");
    }
}

#[test]
fn test_double_inversion_is_identity() {
    let original = parse("M1 -2L3 4 5 -6V7H8C1 2 3 4 5 6S1 2 3 4Q1 2 3 4T9 -9Z", false).unwrap();
    let mut twice = original.clone();
    invert_y(&mut twice);
    assert_ne!(twice, original);
    invert_y(&mut twice);
    assert_eq!(twice, original);
}

#[test]
fn test_draw_commands_for_glyph_outline() {
    let instructions = parse("M0 0h100v100h-100z", true).unwrap();
    let commands = to_draw_commands(&instructions);
    assert_eq!(commands.first(), Some(&DrawCommand::BeginPath));
    assert_eq!(commands.last(), Some(&DrawCommand::ClosePath));
    assert_eq!(commands[3], DrawCommand::LineTo { x: 100.0, y: -100.0 });
    // z closes back to the moveto point
    assert_eq!(commands[5], DrawCommand::LineTo { x: 0.0, y: 0.0 });
}

#[test]
fn test_bounding_rect_of_inverted_outline() {
    let instructions = parse("M50 0L450 0L450 700L50 700Z", true).unwrap();
    let rect = bounding_rect(&instructions).unwrap();
    assert_eq!(rect.min_x, 50.0);
    assert_eq!(rect.max_x, 450.0);
    assert_eq!(rect.min_y, -700.0);
    assert_eq!(rect.max_y, 0.0);
    assert_eq!(rect.width(), 400.0);
}
