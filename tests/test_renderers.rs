use cooklang_parse::render::{markdown, CooklangRenderer, HtmlRenderer};
use cooklang_parse::{latex_document, parse, Format, MarkdownOptions, Renderer};

const PASTA: &str = "---
title: Test
---

Boil @water{1%L} in a #pot{}.

Add @pasta{200%g} and cook for ~{10%min}.
";

#[test]
fn test_markdown_ingredient_list() {
    let recipe = parse(PASTA).unwrap();
    let md = Format::Markdown.render(&recipe).unwrap();

    assert!(md.starts_with("# Test\n\n## Ingredients\n\n- 1 L water\n- 200 g pasta\n"));
    assert!(md.contains("## Equipment\n\n- pot\n"));
    assert!(md.ends_with("Add **200 g pasta** and cook for **10 min**."));
}

#[test]
fn test_markdown_without_lists() {
    let recipe = parse(PASTA).unwrap();
    let options = MarkdownOptions {
        include_ingredients: false,
        include_cookware: false,
        ..Default::default()
    };
    let md = markdown::render(&recipe, &options);
    assert!(!md.contains("## Ingredients"));
    assert!(!md.contains("## Equipment"));
    assert!(md.contains("Boil **1 L water** in a *pot*."));
}

#[test]
fn test_plain_text() {
    let recipe = parse(PASTA).unwrap();
    assert_eq!(
        Format::Text.render(&recipe).unwrap(),
        "Test\n\nBoil 1 L water in a pot.\n\nAdd 200 g pasta and cook for 10 min."
    );
}

#[test]
fn test_html_with_image() {
    let recipe = parse(PASTA).unwrap();
    let html = HtmlRenderer::with_image("photos/pasta.jpg")
        .render(&recipe)
        .unwrap();

    assert!(html.starts_with(
        "<h1>Test</h1>\n<img src=\"photos/pasta.jpg\" alt=\"Recipe Image for Test\"/>\n"
    ));
    assert!(html.contains("<li>1 L water</li>\n<li>200 g pasta</li>"));
    assert!(html.contains("<p>Add <strong>200 g pasta</strong> and cook for <em>10 min</em>.</p>"));
}

#[test]
fn test_latex_recipe() {
    let recipe = parse(PASTA).unwrap();
    let latex = Format::Latex.render(&recipe).unwrap();

    assert!(latex.starts_with("\n\\begin{recipe}{Test}{}\n\n"));
    assert!(latex.contains("\\ingredient[1]{L}{water}\nBoil \\textbf{water 1 L} in a \\textit{pot}.\n\n"));
    assert!(latex.contains("cook for \\textbf{10 min}."));
    assert!(latex.ends_with("\\end{recipe}\n\\cleardoublepage\n\n"));
}

#[test]
fn test_latex_document() {
    let recipes = vec![parse(PASTA).unwrap()];
    let template = vec![
        "\\documentclass{book}\n\\begin{document}".to_string(),
        "%% RECIPE".to_string(),
        "\\end{document}".to_string(),
    ];
    let document = latex_document(&template, &recipes).unwrap();
    assert!(document.contains("\\begin{document}\n\n\\begin{recipe}{Test}{}"));
}

#[test]
fn test_cooklang_round_trip() {
    let recipe = parse(PASTA).unwrap();
    let source = CooklangRenderer.render(&recipe).unwrap();
    assert_eq!(source, PASTA);
    assert_eq!(parse(&source).unwrap(), recipe);
}

#[test]
fn test_json_is_valid() {
    let recipe = parse(PASTA).unwrap();
    let json = Format::Json.render(&recipe).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["ingredients"][1]["name"], "pasta");
    assert_eq!(value["timers"][0]["unit"], "min");
}

#[test]
fn test_renderers_do_not_mutate() {
    let recipe = parse(PASTA).unwrap();
    let before = recipe.clone();
    for format in Format::ALL {
        format.render(&recipe).unwrap();
    }
    assert_eq!(recipe, before);
}
