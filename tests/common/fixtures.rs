use studioflow::command::Command;
use studioflow::document::{Document, Language};
use studioflow::reducer::apply;

/// A document with one freshly created channel; returns the channel id.
pub fn doc_with_channel() -> (Document, String) {
    let doc = apply(
        Document::default(),
        Command::AddChannel {
            name: "True Stories".into(),
            niche: "History".into(),
            sub_niche: "WW2".into(),
            language: Language::English,
        },
    );
    let channel_id = doc.channels[0].id.clone();
    (doc, channel_id)
}

/// A document with one channel holding one Available title.
pub fn doc_with_title() -> (Document, String, String) {
    let (doc, channel_id) = doc_with_channel();
    let doc = apply(
        doc,
        Command::AddTitles {
            channel_id: channel_id.clone(),
            titles: vec!["The Lost Convoy".into()],
        },
    );
    let title_id = doc.channels[0].titles[0].id.clone();
    (doc, channel_id, title_id)
}

/// A document with one channel, one claimed title, and one Planning project.
pub fn doc_with_project() -> (Document, String, String, String) {
    let (doc, channel_id, title_id) = doc_with_title();
    let doc = apply(
        doc,
        Command::AddProject {
            channel_id: channel_id.clone(),
            project_name: "ep1".into(),
            title_id: title_id.clone(),
        },
    );
    let project_id = doc.channels[0].projects[0].id.clone();
    (doc, channel_id, title_id, project_id)
}

/// Add one more titled project to an existing channel; returns the new
/// project id.
pub fn add_project(doc: Document, channel_id: &str, name: &str) -> (Document, String) {
    let doc = apply(
        doc,
        Command::AddTitles {
            channel_id: channel_id.to_string(),
            titles: vec![format!("{name} title")],
        },
    );
    let title_id = doc
        .channel(channel_id)
        .unwrap()
        .titles
        .last()
        .unwrap()
        .id
        .clone();
    let doc = apply(
        doc,
        Command::AddProject {
            channel_id: channel_id.to_string(),
            project_name: name.to_string(),
            title_id,
        },
    );
    let project_id = doc
        .channel(channel_id)
        .unwrap()
        .projects
        .last()
        .unwrap()
        .id
        .clone();
    (doc, project_id)
}

/// Ids of the channel's render roster, in channel order.
pub fn editor_ids(doc: &Document, channel_id: &str) -> Vec<String> {
    doc.channel(channel_id)
        .unwrap()
        .editors
        .iter()
        .map(|e| e.id.clone())
        .collect()
}
