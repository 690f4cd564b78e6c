use studioflow::document::{Document, EditorStatus, ProjectStatus, TitleStatus};

pub fn assert_title_status(doc: &Document, channel_id: &str, title_id: &str, want: TitleStatus) {
    let got = doc
        .channel(channel_id)
        .and_then(|c| c.title(title_id))
        .map(|t| t.status)
        .expect("title should exist");
    assert_eq!(got, want, "title {title_id} status");
}

pub fn assert_project_status(
    doc: &Document,
    channel_id: &str,
    project_id: &str,
    want: ProjectStatus,
) {
    let got = doc
        .channel(channel_id)
        .and_then(|c| c.project(project_id))
        .map(|p| p.status)
        .expect("project should exist");
    assert_eq!(got, want, "project {project_id} status");
}

pub fn assert_editor_state(
    doc: &Document,
    channel_id: &str,
    editor_id: &str,
    want_status: EditorStatus,
    want_current: Option<&str>,
    want_queue: &[&str],
) {
    let editor = doc
        .channel(channel_id)
        .and_then(|c| c.editor(editor_id))
        .expect("editor should exist");
    assert_eq!(editor.status, want_status, "editor {editor_id} status");
    assert_eq!(
        editor.current_project_id.as_deref(),
        want_current,
        "editor {editor_id} current project"
    );
    let queue: Vec<&str> = editor.queue.iter().map(String::as_str).collect();
    assert_eq!(queue, want_queue, "editor {editor_id} queue");
}
