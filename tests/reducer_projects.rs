use studioflow::command::{Command, FileDraft};
use studioflow::document::{ProjectStatus, TitleStatus};
use studioflow::reducer::apply;

mod common;
use common::*;

#[test]
fn add_project_claims_title() {
    let (doc, channel_id, title_id, project_id) = doc_with_project();

    let project = doc
        .channel(&channel_id)
        .unwrap()
        .project(&project_id)
        .unwrap();
    assert_eq!(project.name, "ep1");
    assert_eq!(project.title_id, title_id);
    assert_eq!(project.status, ProjectStatus::Planning);
    assert!(project.files.is_empty());

    assert_title_status(&doc, &channel_id, &title_id, TitleStatus::InProduction);
}

#[test]
fn update_project_status_is_free_form() {
    let (doc, channel_id, _, project_id) = doc_with_project();

    // Any status may follow any status; the progression is a UI convention.
    let doc = apply(
        doc,
        Command::UpdateProjectStatus {
            channel_id: channel_id.clone(),
            project_id: project_id.clone(),
            status: ProjectStatus::Published,
        },
    );
    assert_project_status(&doc, &channel_id, &project_id, ProjectStatus::Published);

    let doc = apply(
        doc,
        Command::UpdateProjectStatus {
            channel_id: channel_id.clone(),
            project_id: project_id.clone(),
            status: ProjectStatus::Scripting,
        },
    );
    assert_project_status(&doc, &channel_id, &project_id, ProjectStatus::Scripting);
}

#[test]
fn delete_project_releases_title() {
    let (doc, channel_id, title_id, project_id) = doc_with_project();
    let doc = apply(
        doc,
        Command::DeleteProject {
            channel_id: channel_id.clone(),
            project_id: project_id.clone(),
        },
    );

    let channel = doc.channel(&channel_id).unwrap();
    assert!(channel.project(&project_id).is_none());
    assert_title_status(&doc, &channel_id, &title_id, TitleStatus::Available);
}

#[test]
fn delete_project_unknown_id_is_noop() {
    let (doc, channel_id, ..) = doc_with_project();
    let next = apply(
        doc.clone(),
        Command::DeleteProject {
            channel_id,
            project_id: "no-such-project".into(),
        },
    );
    assert_eq!(next, doc);
}

#[test]
fn upload_then_delete_file() {
    let (doc, channel_id, _, project_id) = doc_with_project();

    let draft = FileDraft::from_bytes("script.txt", "text/plain", b"fade in");
    let doc = apply(
        doc,
        Command::UploadFile {
            channel_id: channel_id.clone(),
            project_id: project_id.clone(),
            file: draft,
        },
    );

    let files = &doc
        .channel(&channel_id)
        .unwrap()
        .project(&project_id)
        .unwrap()
        .files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "script.txt");
    assert_eq!(files[0].media_type, "text/plain");
    assert_eq!(files[0].size, 7);
    assert!(!files[0].id.is_empty());
    let file_id = files[0].id.clone();

    let doc = apply(
        doc,
        Command::DeleteFile {
            channel_id: channel_id.clone(),
            project_id: project_id.clone(),
            file_id,
        },
    );
    assert!(
        doc.channel(&channel_id)
            .unwrap()
            .project(&project_id)
            .unwrap()
            .files
            .is_empty()
    );
}

#[test]
fn delete_file_unknown_id_is_noop() {
    let (doc, channel_id, _, project_id) = doc_with_project();
    let next = apply(
        doc.clone(),
        Command::DeleteFile {
            channel_id,
            project_id,
            file_id: "no-such-file".into(),
        },
    );
    assert_eq!(next, doc);
}
