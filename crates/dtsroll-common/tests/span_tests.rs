use dtsroll_common::Span;

#[test]
fn span_basics() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn empty_span_at_position() {
    let span = Span::at(42);
    assert_eq!(span.start, 42);
    assert_eq!(span.end, 42);
    assert!(span.is_empty());
}
