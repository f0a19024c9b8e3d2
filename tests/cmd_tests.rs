use scriptorium::cmd::execute;
use scriptorium::cmd_args::{Command, CommandLineArgs};
use scriptorium::BibleApiClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> BibleApiClient {
    BibleApiClient::new(&server.uri()).unwrap()
}

#[tokio::test]
async fn books_command_should_print_one_per_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Ruth", "Esther"])))
        .mount(&server)
        .await;

    let out = execute(&client_for(&server).await, &Command::Books)
        .await
        .unwrap();

    assert_eq!(out, "Ruth\nEsther\n");
}

#[tokio::test]
async fn verses_command_should_print_numbers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verses"))
        .and(query_param("book", "Jude"))
        .and(query_param("chapter", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let args = CommandLineArgs::parse_from(["scriptorium", "verses", "Jude", "1"]);
    let out = execute(&client_for(&server).await, args.command())
        .await
        .unwrap();

    assert_eq!(out, "1 2 3\n");
}

#[tokio::test]
async fn verse_command_should_print_reference_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Jesus wept."})))
        .mount(&server)
        .await;

    let args = CommandLineArgs::parse_from(["scriptorium", "verse", "John", "11", "35"]);
    let out = execute(&client_for(&server).await, args.command())
        .await
        .unwrap();

    assert_eq!(out, "John 11:35  Jesus wept.\n");
}

#[tokio::test]
async fn search_command_should_report_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let command = Command::Search {
        keyword: "behemoth".to_string(),
    };
    let out = execute(&client_for(&server).await, &command).await.unwrap();

    assert_eq!(out, "No results found.\n");
}

#[tokio::test]
async fn read_command_should_print_chapters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books/Obadiah/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"chapter": 1, "verses": [{"verse": 1, "text": "The vision of Obadiah."}]}
        ])))
        .mount(&server)
        .await;

    let command = Command::Read {
        book: "Obadiah".to_string(),
    };
    let out = execute(&client_for(&server).await, &command).await.unwrap();

    assert_eq!(out, "Obadiah\n\nChapter 1\n  1 The vision of Obadiah.\n");
}

#[tokio::test]
async fn failing_request_should_surface_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let command = Command::Chapters {
        book: "John".to_string(),
    };
    let result = execute(&client_for(&server).await, &command).await;

    assert!(result.is_err());
}
