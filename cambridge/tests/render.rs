use cambridge::{DictionaryDocument, format};

const BANK: &str = include_str!("fixtures/queries/bank.html");

#[test]
fn it_should_render_every_entry_of_a_page() {
    let document = DictionaryDocument::from_html(BANK);

    assert_eq!(
        document.to_string(),
        "1. bank (noun)\n\
         \n\
         \tUK: /bæŋk/, US: /bæŋk/\n\
         \n\
         \t    i MONEY: an organization where people and businesses can invest or borrow\n\
         \t      money, change it to foreign money, etc., or a building where these\n\
         \t      services are offered\n\
         \t   ii RIVER: sloping raised land, especially along the sides of a river\n\
         \t  iii a row of similar things, especially electrical devices\n\
         \n\
         2. bank (verb)\n\
         \n\
         \tto put or keep money in a bank\n"
    );
}

#[test]
fn it_should_render_a_single_entry_unnumbered() {
    let document = DictionaryDocument::from_html(BANK);
    let verb = &document.entries[1..];

    assert_eq!(
        format::render_entries(verb),
        "bank (verb)\n\n\tto put or keep money in a bank"
    );
}

#[test]
fn it_should_keep_wrapped_lines_within_width() {
    let document = DictionaryDocument::from_html(BANK);

    for entry in &document.entries {
        for definition in &entry.definitions {
            let wrapped = format::wrap(&definition.explanation, format::WRAP_WIDTH);

            assert!(
                wrapped
                    .lines()
                    .all(|line| line.chars().count() <= format::WRAP_WIDTH)
            );
        }
    }
}

#[test]
fn it_should_render_nothing_for_an_empty_page() {
    let document = DictionaryDocument::from_html("<html><body></body></html>");

    assert!(document.is_empty());
    assert_eq!(document.to_string(), "");
}
