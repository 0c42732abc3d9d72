use sea_orm::EntityTrait;

use crate::server::{bot::wizard::registration::Registration, data::student::StudentRepository};

use super::*;

/// Expect /start to begin registration for an unknown chat
#[tokio::test]
async fn start_begins_registration() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mess_tables().build().await?;
    let service = conversation_service(&test);

    let turn = run(&service, 1001, Conversation::Idle, vec![command(Command::Start)]).await;

    assert_eq!(
        turn.conversation,
        Conversation::Registration(Registration::AwaitingName)
    );

    Ok(())
}

/// Expect an invalid year to re-prompt and the full flow to create exactly one student
#[tokio::test]
async fn registers_student_after_invalid_year() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mess_tables().build().await?;
    let service = conversation_service(&test);

    let turn = run(
        &service,
        1001,
        Conversation::Idle,
        vec![
            command(Command::Start),
            text("Asha Menon"),
            text("H-17"),
            text("twenty"),
        ],
    )
    .await;
    assert!(matches!(
        turn.conversation,
        Conversation::Registration(Registration::AwaitingPassoutYear { .. })
    ));
    assert!(StudentRepository::new(&test.db).get_all().await?.is_empty());

    let photo = Input::Photo {
        file_id: "photo-1".to_string(),
    };
    let turn = run(&service, 1001, turn.conversation, vec![text("2027"), photo]).await;

    assert_eq!(turn.conversation, Conversation::Idle);
    assert!(texts(&turn)[0].starts_with("Registration complete"));

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Asha Menon");
    assert_eq!(students[0].passout_year, 2027);
    assert_eq!(students[0].profile_file_id.as_deref(), Some("photo-1"));
    assert_eq!(students[0].telegram_id, 1001);

    Ok(())
}

/// Expect a taken admission number to end the wizard with the already registered message
#[tokio::test]
async fn reports_duplicate_admission_no() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mess_tables()
        .with_student(1001, "Asha")
        .build()
        .await?;
    let service = conversation_service(&test);

    let turn = run(
        &service,
        2002,
        Conversation::Idle,
        vec![
            command(Command::Start),
            text("Someone Else"),
            text("ADM1001"),
            text("2026"),
            Input::Photo {
                file_id: "photo-2".to_string(),
            },
        ],
    )
    .await;

    assert_eq!(turn.conversation, Conversation::Idle);
    assert_eq!(texts(&turn), vec!["You are already registered."]);
    assert_eq!(StudentRepository::new(&test.db).get_all().await?.len(), 1);

    Ok(())
}

/// Expect /start from a registered chat to greet instead of registering again
#[tokio::test]
async fn greets_registered_student() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mess_tables()
        .with_student(1001, "Asha")
        .build()
        .await?;
    let service = conversation_service(&test);

    let turn = run(&service, 1001, Conversation::Idle, vec![command(Command::Start)]).await;

    assert_eq!(turn.conversation, Conversation::Idle);
    assert!(texts(&turn)[0].starts_with("Welcome back, Asha!"));

    Ok(())
}

/// Expect a database failure while registering to end the wizard with the generic message
#[tokio::test]
async fn reports_storage_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let service = conversation_service(&test);

    let wizard = Registration::AwaitingProfilePhoto {
        name: "Asha".to_string(),
        admission_no: "H-17".to_string(),
        passout_year: 2027,
    };
    let turn = run(
        &service,
        1001,
        Conversation::Registration(wizard),
        vec![Input::Photo {
            file_id: "photo-1".to_string(),
        }],
    )
    .await;

    assert_eq!(turn.conversation, Conversation::Idle);
    assert_eq!(
        texts(&turn),
        vec!["Something went wrong, please try again later."]
    );

    Ok(())
}
