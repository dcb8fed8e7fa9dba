mod support;

use larder::ingredient::Ingredient;
use larder::remote::{
    HttpResponse, MemoryTransport, ADD_FAILED_MESSAGE, LOAD_FAILED_MESSAGE,
    REMOVE_FAILED_MESSAGE,
};
use larder::tea::message::{
    FormMessage, IngredientMessage, Message, RemoteMessage, SessionMessage,
};
use larder::tea::{Model, Program};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use support::{client_with, logged_in_program, ScriptedTransport};

const DEBOUNCE: Duration = Duration::from_millis(500);

fn fill_form(program: &mut Program, title: &str, amount: &str) {
    program.dispatch(Message::Form(FormMessage::TitleChanged(title.to_string())));
    program.dispatch(Message::Form(FormMessage::AmountChanged(amount.to_string())));
}

#[tokio::test]
async fn test_add_appends_with_generated_key() {
    let transport = ScriptedTransport::new();
    transport.respond(Method::POST, HttpResponse::ok(r#"{"name":"gen-1"}"#));
    let mut program = logged_in_program(transport.clone(), DEBOUNCE);

    fill_form(&mut program, "Carrot", "3");
    program.dispatch(Message::Form(FormMessage::Submit));
    assert!(program.model().request.loading());
    program.settle().await;

    let model = program.model();
    assert_eq!(
        model.ingredients.items(),
        &[Ingredient::new("gen-1", "Carrot", "3")][..]
    );
    assert!(!model.request.loading());
    assert_eq!(model.request.error(), None);

    let posts = transport.requests_with(Method::POST);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].url.as_str(), "http://store.test/ingredients.json");
    let body: serde_json::Value =
        serde_json::from_str(posts[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "title": "Carrot", "amount": "3" }));
}

#[tokio::test]
async fn test_back_to_back_submits_keep_every_record() {
    let transport = Arc::new(MemoryTransport::new("ingredients"));
    let mut program = logged_in_program(transport.clone(), DEBOUNCE);

    fill_form(&mut program, "Carrot", "3");
    program.dispatch(Message::Form(FormMessage::Submit));
    fill_form(&mut program, "Onion", "1");
    program.dispatch(Message::Form(FormMessage::Submit));
    program.settle().await;

    let model = program.model();
    assert_eq!(transport.ingredients().len(), 2);
    assert_eq!(model.ingredients.len(), 2);
    for stored in transport.ingredients() {
        assert!(model.ingredients.contains(&stored.id));
    }
    assert!(!model.request.loading());
    assert_eq!(model.request.error(), None);
}

#[tokio::test]
async fn test_add_failure_sets_error_and_keeps_items() {
    let transport = ScriptedTransport::new();
    transport.respond(Method::POST, HttpResponse::new(500, "oops"));

    let mut model = Model::new();
    model.session.login();
    model.ingredients.append(Ingredient::new("a", "Pepper", "1"));
    let mut program = Program::with_model(model, client_with(transport.clone()), DEBOUNCE);

    fill_form(&mut program, "Salt", "2");
    program.dispatch(Message::Form(FormMessage::Submit));
    program.settle().await;

    let model = program.model();
    assert_eq!(model.ingredients.len(), 1);
    assert!(!model.request.loading());
    assert_eq!(model.request.error(), Some(ADD_FAILED_MESSAGE));

    program.dispatch(Message::Remote(RemoteMessage::ClearError));
    assert_eq!(program.model().request.error(), None);
    assert!(!program.model().request.loading());
}

#[tokio::test]
async fn test_remove_deletes_item_path() {
    let transport = ScriptedTransport::new();
    let mut model = Model::new();
    model.session.login();
    model.ingredients.append(Ingredient::new("a", "Salt", "1"));
    model.ingredients.append(Ingredient::new("b", "Pepper", "2"));
    let mut program = Program::with_model(model, client_with(transport.clone()), DEBOUNCE);

    program.dispatch(Message::Ingredients(IngredientMessage::Remove("a".to_string())));
    program.settle().await;

    let deletes = transport.requests_with(Method::DELETE);
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].url.as_str(), "http://store.test/ingredients/a.json");

    let ids: Vec<&str> = program
        .model()
        .ingredients
        .items()
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b"]);
}

#[tokio::test]
async fn test_remove_failure_keeps_item() {
    let transport = ScriptedTransport::new();
    transport.respond(Method::DELETE, HttpResponse::new(404, "{}"));
    let mut model = Model::new();
    model.session.login();
    model.ingredients.append(Ingredient::new("a", "Salt", "1"));
    let mut program = Program::with_model(model, client_with(transport), DEBOUNCE);

    program.dispatch(Message::Ingredients(IngredientMessage::Remove("a".to_string())));
    program.settle().await;

    assert_eq!(program.model().ingredients.len(), 1);
    assert_eq!(program.model().request.error(), Some(REMOVE_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_login_loads_collection() {
    let transport = Arc::new(MemoryTransport::with_ingredients(
        "ingredients",
        vec![
            Ingredient::new("k1", "Salt", "1"),
            Ingredient::new("k2", "Pepper", "3"),
        ],
    ));
    let mut program = Program::new(client_with(transport.clone()), DEBOUNCE);

    program.dispatch(Message::Session(SessionMessage::Login));
    program.settle().await;

    let model = program.model();
    assert!(model.session.is_authenticated());
    assert_eq!(model.ingredients.len(), 2);
    assert_eq!(model.selected, Some(0));
    assert!(model.last_loaded.is_some());

    // A second login is a no-op and does not reload
    program.dispatch(Message::Session(SessionMessage::Login));
    program.settle().await;
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_load_failure_keeps_previous_items() {
    let transport = ScriptedTransport::new();
    transport.respond(Method::GET, HttpResponse::new(503, ""));
    let mut model = Model::new();
    model.session.login();
    model.ingredients.append(Ingredient::new("a", "Salt", "1"));
    let mut program = Program::with_model(model, client_with(transport), DEBOUNCE);

    program.dispatch(Message::Ingredients(IngredientMessage::Refresh));
    program.settle().await;

    assert_eq!(program.model().ingredients.len(), 1);
    assert_eq!(program.model().request.error(), Some(LOAD_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_add_then_remove_against_memory_store() {
    let transport = Arc::new(MemoryTransport::new("ingredients"));
    let mut program = logged_in_program(transport.clone(), DEBOUNCE);

    fill_form(&mut program, "Flour", "500");
    program.dispatch(Message::Form(FormMessage::Submit));
    program.settle().await;

    let id = program.model().ingredients.items()[0].id.clone();
    assert_eq!(transport.ingredients()[0].id, id);

    program.dispatch(Message::Ingredients(IngredientMessage::RemoveSelected));
    program.settle().await;

    assert!(program.model().ingredients.is_empty());
    assert!(transport.ingredients().is_empty());
    assert_eq!(program.model().selected, None);
}
