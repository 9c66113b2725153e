use crate::error::CleanError;
use html5ever::{driver::ParseOpts, tendril::TendrilSink, tree_builder::TreeBuilderOpts};
use scraper::{Html, Node};
use tracing::trace;

/// Parents whose text children are never visible.
const HIDDEN_PARENTS: [&str; 4] = ["style", "link", "head", "script"];

/// Elements html5ever keeps as a single unparsed text child (raw text and
/// escapable raw text). Their content is parsed again as markup.
const RAW_TEXT_PARENTS: [&str; 7] = [
    "iframe",
    "noembed",
    "noframes",
    "xmp",
    "plaintext",
    "title",
    "textarea",
];

/// Given HTML markup, return only the text that is visible.
///
/// The markup is parsed leniently with html5ever, so unclosed or misnested tags
/// are recovered the way a browser would. Every text node that has content other
/// than whitespace, and whose immediate parent is not one of `style`, `link`,
/// `head` or `script`, is kept. Kept nodes are joined with a single space in
/// document order.
///
/// Scripting is disabled while parsing, so `<noscript>` children are elements.
/// Markup inside raw text elements such as `<iframe>` or `<title>` is parsed
/// again, and only its text is kept.
///
/// # Errors
///
/// Returns [`CleanError::Parse`] when the input is empty or only whitespace,
/// since there is no document to extract from.
pub fn html(html_content: &str) -> Result<String, CleanError> {
    if is_blank(html_content) {
        return Err(CleanError::Parse {
            reason: "document is empty".to_string(),
        });
    }

    let mut visible: Vec<String> = Vec::new();
    collect_visible(&parse(html_content), &mut visible);
    trace!("html: kept {} text nodes", visible.len());

    Ok(visible.join(" "))
}

fn parse(html_content: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    html5ever::driver::parse_document(Html::new_document(), opts).one(html_content)
}

fn collect_visible(document: &Html, visible: &mut Vec<String>) {
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        if is_blank(text) {
            continue;
        }
        let parent = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map(|element| element.name());
        match parent {
            Some(name) if HIDDEN_PARENTS.contains(&name) => {}
            // The raw content loses its opening tag, so each pass is shorter.
            Some(name) if RAW_TEXT_PARENTS.contains(&name) && text.contains('<') => {
                collect_visible(&parse(text), visible);
            }
            _ => visible.push(text.to_string()),
        }
    }
}

// Non-breaking and other Unicode spaces count as content here.
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}
