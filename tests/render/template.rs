use newsdesk::render::html::{DEFAULT_TEMPLATE, HTML_SLOTS};
use newsdesk::render::{RenderError, SlotValues, Template};

#[test]
fn renders_defaults_without_markers() {
    let template =
        Template::parse("<h1><!-- slot:title -->Default<!-- /slot:title --></h1>").unwrap();

    let output = template.render(&SlotValues::new()).unwrap();

    assert_eq!(output, "<h1>Default</h1>");
}

#[test]
fn fills_every_occurrence_of_a_slot() {
    let template = Template::parse(
        "<title><!-- slot:title -->A<!-- /slot:title --></title>\
         <h1><!-- slot:title -->A<!-- /slot:title --></h1>\
         <p><!-- slot:body -->B<!-- /slot:body --></p>",
    )
    .unwrap();

    let mut values = SlotValues::new();
    values.set("title", "New");
    let output = template.render(&values).unwrap();

    assert_eq!(output, "<title>New</title><h1>New</h1><p>B</p>");
}

#[test]
fn lists_slot_names() {
    let template = Template::parse(
        "<!-- slot:b -->1<!-- /slot:b --><!-- slot:a -->2<!-- /slot:a --><!-- slot:b -->3<!-- /slot:b -->",
    )
    .unwrap();

    let names: Vec<&str> = template.slot_names().into_iter().collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!(template.has_slot("a"));
    assert!(!template.has_slot("c"));
}

#[test]
fn require_reports_missing_slot() {
    let template = Template::parse("<!-- slot:a -->1<!-- /slot:a -->").unwrap();

    assert_eq!(template.require(["a"]), Ok(()));
    assert_eq!(
        template.require(["a", "stats"]),
        Err(RenderError::MissingSlot("stats".to_string()))
    );
}

#[test]
fn render_rejects_unknown_binding() {
    let template = Template::parse("plain text").unwrap();
    let mut values = SlotValues::new();
    values.set("ghost", "boo");

    assert_eq!(
        template.render(&values),
        Err(RenderError::UnknownSlot("ghost".to_string()))
    );
}

#[test]
fn markers_tolerate_spacing_around_names() {
    let template = Template::parse(
        "<p><!-- slot:a-->x<!-- /slot:a--></p><p><!-- slot:  b   -->y<!-- /slot:  b   --></p>",
    )
    .unwrap();

    let mut values = SlotValues::new();
    values.set("a", "1").set("b", "2");
    let output = template.render(&values).unwrap();

    assert_eq!(output, "<p>1</p><p>2</p>");
}

#[test]
fn parse_rejects_unclosed_slot() {
    let err = Template::parse("<!-- slot:a -->never closed").unwrap_err();

    assert_eq!(err, RenderError::UnclosedSlot("a".to_string()));
}

#[test]
fn parse_rejects_unterminated_marker() {
    let err = Template::parse("text <!-- slot:a").unwrap_err();

    assert_eq!(err, RenderError::MalformedMarker(5));
}

#[test]
fn parse_rejects_invalid_name() {
    let err = Template::parse("<!-- slot:Bad Name -->x<!-- /slot:Bad Name -->").unwrap_err();

    assert_eq!(err, RenderError::InvalidSlotName("Bad Name".to_string()));
}

#[test]
fn parse_rejects_nested_slot() {
    let err = Template::parse(
        "<!-- slot:outer --><!-- slot:inner -->x<!-- /slot:inner --><!-- /slot:outer -->",
    )
    .unwrap_err();

    assert_eq!(
        err,
        RenderError::NestedSlot {
            outer: "outer".to_string(),
            inner: "inner".to_string()
        }
    );
}

#[test]
fn parse_rejects_stray_close() {
    let err = Template::parse("text<!-- /slot:a -->").unwrap_err();

    assert_eq!(err, RenderError::StrayClose("a".to_string()));
}

#[test]
fn builtin_template_defines_every_html_slot() {
    let template = Template::parse(DEFAULT_TEMPLATE).expect("Built-in template should parse");

    assert_eq!(template.require(HTML_SLOTS), Ok(()));
    assert_eq!(template.slot_names().len(), HTML_SLOTS.len());
}
