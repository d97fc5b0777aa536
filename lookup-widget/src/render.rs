use dictionary::{Entry, ErrorPayload};

use crate::view::Element;

pub const DEFAULT_ERROR_TITLE: &str = "No results";
pub const DEFAULT_ERROR_MESSAGE: &str = "Please try a different word.";
pub const NETWORK_ERROR_TITLE: &str = "Network error";
pub const NETWORK_ERROR_MESSAGE: &str = "Please check your connection and try again.";
pub const NO_DEFINITIONS: &str = "No definitions found.";

const MAX_SYNONYMS: usize = 6;

pub fn info(text: impl Into<String>) -> Element {
    Element::new("div").class("card").text(text)
}

pub fn looking_up(word: &str) -> Element {
    info(format!("Looking up \"{word}\"..."))
}

pub fn error(title: &str, message: &str) -> Element {
    Element::new("div")
        .class("card error")
        .child(Element::new("h3").text(title))
        .child(Element::new("p").text(message))
}

pub fn api_error(payload: &ErrorPayload) -> Element {
    error(
        payload.title().unwrap_or(DEFAULT_ERROR_TITLE),
        payload.message().unwrap_or(DEFAULT_ERROR_MESSAGE),
    )
}

pub fn network_error() -> Element {
    error(NETWORK_ERROR_TITLE, NETWORK_ERROR_MESSAGE)
}

/// One card per entry: header, then every well-formed meaning with its
/// numbered definitions. Malformed meanings are left out silently.
pub fn entry(entry: &Entry) -> Element {
    let mut header = Element::new("div")
        .class("word-header")
        .child(Element::new("h2").class("word-title").text(entry.word()));
    if let Some(phonetic) = entry.phonetic_text() {
        header.append(Element::new("span").class("phonetic").text(phonetic));
    }

    let mut card = Element::new("article").class("card").child(header);

    let meanings = entry.meanings.as_deref().unwrap_or_default();
    if meanings.is_empty() {
        card.append(Element::new("p").text(NO_DEFINITIONS));
        return card;
    }

    for (part_of_speech, definitions) in meanings.iter().filter_map(|meaning| meaning.parts()) {
        card.append(
            Element::new("div")
                .class("part-of-speech")
                .text(part_of_speech),
        );
        let mut list = Element::new("ol").class("definition-list");
        for definition in definitions {
            let mut item = Element::new("li").child(Element::new("span").text(definition.text()));
            if let Some(example) = definition.example() {
                item.append(
                    Element::new("span")
                        .class("example")
                        .text(format!(" — \"{example}\"")),
                );
            }
            if let Some(synonyms) = definition.synonyms(MAX_SYNONYMS) {
                item.append(
                    Element::new("div")
                        .class("example")
                        .text(format!("Synonyms: {}", synonyms.join(", "))),
                );
            }
            list.append(item);
        }
        card.append(list);
    }
    card
}

#[cfg(test)]
mod tests {
    use dictionary::LookupResponse;

    use super::*;

    fn entries(body: &str) -> Vec<Entry> {
        match serde_json::from_str(body).unwrap() {
            LookupResponse::Entries(entries) => entries,
            LookupResponse::Error(payload) => panic!("unexpected error payload {payload:?}"),
        }
    }

    #[test]
    fn renders_a_complete_entry() {
        let cat = entries(
            r#"[{"word":"cat","phonetic":"/kæt/","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"A small domesticated feline.","example":"The cat slept."}]}]}]"#,
        );
        let card = entry(&cat[0]);

        assert_eq!(card.tag(), "article");
        assert!(card.has_class("card"));
        assert_eq!(card.find_all("word-title")[0].text_content(), "cat");
        assert_eq!(card.find_all("phonetic")[0].text_content(), "/kæt/");
        let parts = card.find_all("part-of-speech");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].text_content(), "noun");
        let lists = card.find_all("definition-list");
        let items: Vec<_> = lists[0].children().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].text_content(),
            "A small domesticated feline. — \"The cat slept.\""
        );
        assert_eq!(
            items[0].find_all("example")[0].text_content(),
            " — \"The cat slept.\""
        );
    }

    #[test]
    fn omits_the_phonetic_when_none_is_available() {
        let card = entry(&entries(r#"[{"word":"hmm","phonetics":[{"audio":""},{"text":""}]}]"#)[0]);
        assert!(card.find_all("phonetic").is_empty());
        let header = card.find_all("word-header");
        assert_eq!(header[0].children().count(), 1);
    }

    #[test]
    fn entries_without_meanings_say_so() {
        for body in [
            r#"[{"word":"x"}]"#,
            r#"[{"word":"x","meanings":[]}]"#,
            r#"[{"word":"x","meanings":"n/a"}]"#,
        ] {
            let card = entry(&entries(body)[0]);
            let paragraphs: Vec<_> = card.children().filter(|c| c.tag() == "p").collect();
            assert_eq!(paragraphs.len(), 1, "{body}");
            assert_eq!(paragraphs[0].text_content(), NO_DEFINITIONS);
        }
    }

    #[test]
    fn skips_malformed_meanings_but_keeps_siblings() {
        let card = entry(
            &entries(
                r#"[{"word":"run","meanings":[
                    {"definitions":[{"definition":"orphan"}]},
                    {"partOfSpeech":"verb","definitions":[{"definition":"To move fast."}]},
                    {"partOfSpeech":"noun","definitions":{"definition":"not a list"}}
                ]}]"#,
            )[0],
        );
        let parts: Vec<_> = card
            .find_all("part-of-speech")
            .into_iter()
            .map(|part| part.text_content())
            .collect();
        assert_eq!(parts, ["verb"]);
        assert!(!card.to_html().contains("orphan"));
        assert_eq!(card.find_all("definition-list").len(), 1);
    }

    #[test]
    fn truncates_synonyms_to_six() {
        let card = entry(
            &entries(
                r#"[{"word":"big","meanings":[{"partOfSpeech":"adjective","definitions":[
                    {"definition":"Large.","synonyms":["a","b","c","d","e","f","g","h"]},
                    {"synonyms":[]}
                ]}]}]"#,
            )[0],
        );
        let examples = card.find_all("example");
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].text_content(), "Synonyms: a, b, c, d, e, f");
        let items: Vec<_> = card.find_all("definition-list")[0].children().collect();
        assert_eq!(items[1].text_content(), "");
    }

    #[test]
    fn leaves_out_malformed_definitions_and_synonyms() {
        let card = entry(
            &entries(
                r#"[{"word":"big","meanings":[{"partOfSpeech":"adjective","definitions":[
                    null,
                    {"definition":"Large.","synonyms":["a",1,"b"]}
                ]}]}]"#,
            )[0],
        );
        let items: Vec<_> = card.find_all("definition-list")[0].children().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text_content(), "Large.Synonyms: a, b");
    }

    #[test]
    fn error_cards_fall_back_to_defaults() {
        let card = api_error(&ErrorPayload::default());
        assert!(card.has_class("error"));
        assert_eq!(
            card.to_html(),
            "<div class=\"card error\"><h3>No results</h3><p>Please try a different word.</p></div>"
        );

        let card = api_error(&ErrorPayload {
            title: Some("No Definitions Found".into()),
            message: Some("Sorry pal".into()),
        });
        assert_eq!(card.text_content(), "No Definitions FoundSorry pal");
    }

    #[test]
    fn info_cards_insert_the_word_as_text() {
        let card = looking_up("<b>cat</b>");
        assert_eq!(card.text_content(), "Looking up \"<b>cat</b>\"...");
        assert_eq!(
            card.to_html(),
            "<div class=\"card\">Looking up &quot;&lt;b&gt;cat&lt;/b&gt;&quot;...</div>"
        );
    }
}
