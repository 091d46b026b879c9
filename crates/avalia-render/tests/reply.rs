use avalia_render::markup::{parse, Inline, Span};
use avalia_render::render;

#[test]
fn summary_reply_renders_heading_break_and_list() {
    let html = render("**Resumo:** Boa condição.\n- Manter dieta");

    assert_eq!(
        html,
        "<strong>Resumo:</strong> Boa condição.<br />\
         <ul><li class=\"ml-4 list-disc\">Manter dieta</li></ul>"
    );
}

#[test]
fn typical_model_reply() {
    let reply = "\
**Pontos positivos**
- *Frequência cardíaca* em repouso adequada
- Boa disposição para treinar

**Atenção:** IRCQ com risco *muito alto*.";

    let html = render(reply);

    assert!(html.starts_with("<strong>Pontos positivos</strong><br /><ul>"));
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li ").count(), 2);
    assert!(html.contains("<li class=\"ml-4 list-disc\"><em>Frequência cardíaca</em> em repouso adequada</li>"));
    assert!(html.contains("</ul><br /><br /><strong>Atenção:</strong> IRCQ com risco <em>muito alto</em>."));
    assert!(!html.contains('*'));
}

#[test]
fn nested_emphasis_in_a_reply() {
    let html = render("**Atenção: *muito alto***\n- **a *b* c**\n- *a **b** c*");
    assert_eq!(
        html,
        "<strong>Atenção: <em>muito alto</em></strong><br />\
         <ul><li class=\"ml-4 list-disc\"><strong>a <em>b</em> c</strong></li>\
         <li class=\"ml-4 list-disc\"><em>a <strong>b</strong> c</em></li></ul>"
    );
    assert!(!html.contains('*'));
}

#[test]
fn parsed_spans_serialize_for_clients() {
    let parsed = parse("**a**\n- b");
    assert_eq!(
        parsed.spans,
        vec![
            Span::Inline(Inline::Bold(vec![Inline::Text("a".into())])),
            Span::LineBreak,
            Span::ListItem(vec![Inline::Text("b".into())]),
        ]
    );

    let json = serde_json::to_value(&parsed.spans).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "kind": "inline",
                "content": { "kind": "bold", "content": [{ "kind": "text", "content": "a" }] }
            },
            { "kind": "line_break" },
            { "kind": "list_item", "content": [{ "kind": "text", "content": "b" }] },
        ])
    );
}
