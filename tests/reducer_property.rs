use proptest::prelude::*;

use studioflow::command::{Command, FileDraft};
use studioflow::document::{EditorStatus, ProjectStatus};
use studioflow::reducer::apply;

mod common;
use common::*;

/// Every command addressing an id the document does not contain must return
/// the document unchanged. Generated ids are short lowercase strings, which
/// can never collide with the 36-character UUIDs the engine assigns.
fn unaddressable_commands(channel: String, inner: String) -> Vec<Command> {
    let file = FileDraft::from_bytes("x.bin", "application/octet-stream", b"x");
    vec![
        Command::DeleteChannel {
            channel_id: channel.clone(),
        },
        Command::AddProject {
            channel_id: channel.clone(),
            project_name: "p".into(),
            title_id: inner.clone(),
        },
        Command::UpdateProjectStatus {
            channel_id: channel.clone(),
            project_id: inner.clone(),
            status: ProjectStatus::Completed,
        },
        Command::DeleteProject {
            channel_id: channel.clone(),
            project_id: inner.clone(),
        },
        Command::AddTitles {
            channel_id: channel.clone(),
            titles: vec!["t".into()],
        },
        Command::DeleteTitle {
            channel_id: channel.clone(),
            title_id: inner.clone(),
        },
        Command::UploadFile {
            channel_id: channel.clone(),
            project_id: inner.clone(),
            file,
        },
        Command::DeleteFile {
            channel_id: channel.clone(),
            project_id: inner.clone(),
            file_id: inner.clone(),
        },
        Command::AssignVideoGeneration {
            channel_id: channel.clone(),
            project_id: inner.clone(),
            editor_id: inner.clone(),
        },
        Command::StopVideoGeneration {
            channel_id: channel.clone(),
            editor_id: inner.clone(),
        },
        Command::UpdateEditorStatus {
            channel_id: channel,
            editor_id: inner,
            status: EditorStatus::Busy,
            current_project_id: None,
        },
    ]
}

proptest! {
    #[test]
    fn commands_with_unknown_channel_are_noops(
        channel in "[a-z]{1,12}",
        inner in "[a-z]{1,12}",
    ) {
        let (doc, ..) = doc_with_project();
        for command in unaddressable_commands(channel.clone(), inner.clone()) {
            let next = apply(doc.clone(), command.clone());
            prop_assert_eq!(&next, &doc, "command {} mutated the document", command.kind());
        }
    }

    #[test]
    fn commands_with_known_channel_but_unknown_inner_ids_are_noops(
        inner in "[a-z]{1,12}",
    ) {
        let (doc, channel_id, ..) = doc_with_project();
        let commands = vec![
            Command::UpdateProjectStatus {
                channel_id: channel_id.clone(),
                project_id: inner.clone(),
                status: ProjectStatus::Completed,
            },
            Command::DeleteProject {
                channel_id: channel_id.clone(),
                project_id: inner.clone(),
            },
            Command::DeleteTitle {
                channel_id: channel_id.clone(),
                title_id: inner.clone(),
            },
            Command::DeleteFile {
                channel_id: channel_id.clone(),
                project_id: inner.clone(),
                file_id: inner.clone(),
            },
            Command::AssignVideoGeneration {
                channel_id: channel_id.clone(),
                project_id: inner.clone(),
                editor_id: inner.clone(),
            },
            Command::StopVideoGeneration {
                channel_id: channel_id.clone(),
                editor_id: inner.clone(),
            },
        ];
        for command in commands {
            let next = apply(doc.clone(), command.clone());
            prop_assert_eq!(&next, &doc, "command {} mutated the document", command.kind());
        }
    }
}

#[test]
fn unknown_command_type_is_noop() {
    let (doc, ..) = doc_with_project();
    let next = apply(doc.clone(), Command::Unknown);
    assert_eq!(next, doc);
}
