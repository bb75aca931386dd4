use html_escape::encode_text;

use crate::entities::flashcard::model::Flashcard;

const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");
const RESULTS_TEMPLATE: &str = include_str!("../../../templates/results.html");

pub fn render_index() -> &'static str {
    INDEX_TEMPLATE
}

pub fn render_results(topic: &str, flashcards: &[Flashcard]) -> String {
    let cards = flashcards
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n");

    fill_template(
        RESULTS_TEMPLATE,
        &[
            ("topic", encode_text(topic).into_owned()),
            ("count", flashcards.len().to_string()),
            ("cards", cards),
        ],
    )
}

/// Single pass over `{{name}}` placeholders, so substituted values are never
/// rescanned. Unknown placeholders are left untouched.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };
        let name = &after_open[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }
    output.push_str(rest);
    output
}

fn render_card(flashcard: &Flashcard) -> String {
    format!(
        "            <li class=\"flashcard\">\n                <p class=\"question\">{}</p>\n                <details><summary>Show answer</summary><p class=\"answer\">{}</p></details>\n            </li>",
        encode_text(&flashcard.question),
        encode_text(&flashcard.answer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_posts_topic_and_count_to_generate() {
        let page = render_index();
        assert!(page.contains("action=\"/generate\""));
        assert!(page.contains("name=\"topic\""));
        assert!(page.contains("name=\"num_cards\""));
    }

    #[test]
    fn results_list_every_card_and_echo_the_topic() {
        let page = render_results(
            "Cell biology",
            &[Flashcard::new("Q1", "A1"), Flashcard::new("Q2", "A2")],
        );
        assert!(page.contains("Cell biology"));
        assert!(page.contains("(2 cards)"));
        assert!(page.contains("Q1") && page.contains("A1"));
        assert!(page.contains("Q2") && page.contains("A2"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn placeholders_in_values_are_not_expanded() {
        let filled = fill_template(
            "<h1>{{topic}}</h1>{{count}}{{unknown}}",
            &[("topic", "{{count}}".to_string()), ("count", "3".to_string())],
        );
        assert_eq!(filled, "<h1>{{count}}</h1>3{{unknown}}");
    }

    #[test]
    fn user_and_model_text_is_escaped() {
        let page = render_results(
            "<script>alert(1)</script>",
            &[Flashcard::new("Is 1 < 2?", "<b>yes</b> & {{topic}}")],
        );
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("Is 1 &lt; 2?"));
        assert!(page.contains("&lt;b&gt;yes&lt;/b&gt; &amp; {{topic}}"));
    }
}
