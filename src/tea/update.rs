/// Update function for TEA pattern
///
/// Central update function that handles all messages and updates the model
/// accordingly. All state changes happen here.

use crate::ingredient::{created_key, ingredients_from_listing, Ingredient};
use crate::remote::{RemoteRequest, RequestOutcome, RequestTag};
use crate::store::IngredientAction;
use crate::tea::message::{
    FilterMessage, FormMessage, IngredientMessage, Message, RemoteMessage, SessionMessage,
    SystemMessage, UIMessage,
};
use crate::tea::{Command, Model, UpdateResult};
use chrono::Local;
use serde_json::Value;

/// Main update function that processes messages and returns updated model with commands
pub fn update(model: Model, message: Message) -> UpdateResult<Model> {
    match message {
        Message::System(msg) => update_system(model, msg),
        Message::Session(msg) => update_session(model, msg),
        Message::Form(msg) => update_form(model, msg),
        Message::Filter(msg) => update_filter(model, msg),
        Message::Ingredients(msg) => update_ingredients(model, msg),
        Message::Remote(msg) => update_remote(model, msg),
        Message::UI(msg) => update_ui(model, msg),
    }
}

/// Register a request with the status tracker and wrap it in a command
fn issue(model: &mut Model, tag: RequestTag) -> Command {
    let seq = model.request.begin_with(|seq| tag.slot(seq));
    Command::remote(RemoteRequest::new(seq, tag))
}

fn update_system(mut model: Model, message: SystemMessage) -> UpdateResult<Model> {
    match message {
        SystemMessage::Quit => {
            model.should_quit = true;
            UpdateResult::just_model(model)
        }
    }
}

fn update_session(mut model: Model, message: SessionMessage) -> UpdateResult<Model> {
    match message {
        SessionMessage::Login => {
            if !model.session.login() {
                return UpdateResult::just_model(model);
            }
            tracing::info!("Logged in");

            // The ingredients view loads the collection as soon as it appears.
            let tag = RequestTag::load(model.filter.query());
            let command = issue(&mut model, tag);
            UpdateResult::with_command(model, command)
        }
    }
}

fn update_form(mut model: Model, message: FormMessage) -> UpdateResult<Model> {
    match message {
        FormMessage::TitleChanged(title) => {
            model.form.title = title;
            UpdateResult::just_model(model)
        }
        FormMessage::AmountChanged(amount) => {
            model.form.amount = amount;
            UpdateResult::just_model(model)
        }
        FormMessage::Submit => {
            let tag = RequestTag::Add(model.form.to_new_ingredient());
            let command = issue(&mut model, tag);
            UpdateResult::with_command(model, command)
        }
    }
}

fn update_filter(mut model: Model, message: FilterMessage) -> UpdateResult<Model> {
    match message {
        FilterMessage::Changed(text) => {
            model.filter.set_text(text.clone());
            UpdateResult::with_command(model, Command::ScheduleFilter(text))
        }
        FilterMessage::Elapsed(captured) => {
            if !model.filter.is_settled(&captured) {
                tracing::debug!("Filter moved on from {:?}, skipping load", captured);
                return UpdateResult::just_model(model);
            }
            let tag = RequestTag::load(model.filter.query());
            let command = issue(&mut model, tag);
            UpdateResult::with_command(model, command)
        }
    }
}

fn update_ingredients(mut model: Model, message: IngredientMessage) -> UpdateResult<Model> {
    match message {
        IngredientMessage::Remove(id) => {
            let command = issue(&mut model, RequestTag::Remove { id });
            UpdateResult::with_command(model, command)
        }
        IngredientMessage::RemoveSelected => {
            let selected = model.selected_ingredient().map(|ingredient| ingredient.id.clone());
            match selected {
                Some(id) => update_ingredients(model, IngredientMessage::Remove(id)),
                None => UpdateResult::just_model(model),
            }
        }
        IngredientMessage::Refresh => {
            let tag = RequestTag::load(model.filter.query());
            let command = issue(&mut model, tag);
            UpdateResult::with_command(model, command)
        }
    }
}

fn update_remote(mut model: Model, message: RemoteMessage) -> UpdateResult<Model> {
    match message {
        RemoteMessage::Settled(outcome) => {
            settle(&mut model, outcome);
            UpdateResult::just_model(model)
        }
        RemoteMessage::ClearError => {
            model.request.clear();
            UpdateResult::just_model(model)
        }
    }
}

/// Apply a settled request to the status and the collection
fn settle(model: &mut Model, outcome: RequestOutcome) {
    let RequestOutcome { seq, tag, result } = outcome;
    let slot = tag.slot(seq);

    if !model.request.is_latest(&slot, seq) {
        tracing::debug!("Ignoring superseded response {} for {:?}", seq, slot);
        return;
    }

    let applied = result.and_then(|body| {
        let action = collection_action(&tag, &body)?;
        Ok((body, action))
    });

    match applied {
        Ok((body, action)) => {
            model.request.complete(&slot, seq, body);
            if let IngredientAction::ReplaceAll(items) = &action {
                tracing::info!("Loaded {} ingredients", items.len());
                model.last_loaded = Some(Local::now());
            }
            model.ingredients.dispatch(action);
            model.clamp_selection();
        }
        Err(e) => {
            tracing::warn!("Request {} for {:?} failed: {}", seq, slot, e);
            model.request.fail(&slot, seq, tag.failure_message());
        }
    }
}

/// Collection change implied by a successful response
fn collection_action(
    tag: &RequestTag,
    body: &Value,
) -> Result<IngredientAction, crate::remote::RemoteError> {
    Ok(match tag {
        RequestTag::Load { .. } => IngredientAction::ReplaceAll(ingredients_from_listing(body)?),
        RequestTag::Add(new) => {
            IngredientAction::Append(Ingredient::from_new(created_key(body)?, new.clone()))
        }
        RequestTag::Remove { id } => IngredientAction::RemoveById(id.clone()),
    })
}

fn update_ui(mut model: Model, message: UIMessage) -> UpdateResult<Model> {
    match message {
        UIMessage::FocusNext => model.focus = model.focus.next(),
        UIMessage::FocusPrevious => model.focus = model.focus.previous(),
        UIMessage::Focus(focus) => model.focus = focus,
        UIMessage::SelectNext => {
            let len = model.ingredients.len();
            if len > 0 {
                model.selected = Some(model.selected.map_or(0, |i| (i + 1).min(len - 1)));
            }
        }
        UIMessage::SelectPrevious => {
            if !model.ingredients.is_empty() {
                model.selected = Some(model.selected.map_or(0, |i| i.saturating_sub(1)));
            }
        }
    }
    UpdateResult::just_model(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{RemoteError, RequestSlot, ADD_FAILED_MESSAGE, LOAD_FAILED_MESSAGE};
    use crate::tea::message::Focus;
    use serde_json::json;

    fn remote_request(commands: &[Command]) -> RemoteRequest {
        match commands {
            [Command::Remote(request)] => request.clone(),
            other => panic!("expected a single remote command, got {:?}", other),
        }
    }

    fn settled(request: &RemoteRequest, result: Result<Value, RemoteError>) -> Message {
        Message::Remote(RemoteMessage::Settled(RequestOutcome {
            seq: request.seq,
            tag: request.tag.clone(),
            result,
        }))
    }

    #[test]
    fn test_login_loads_collection_once() {
        let result = update(Model::new(), Message::Session(SessionMessage::Login));
        let request = remote_request(&result.commands);
        assert_eq!(request.tag, RequestTag::Load { filter: None });
        assert!(result.model.request.loading());

        let again = update(result.model, Message::Session(SessionMessage::Login));
        assert!(again.commands.is_empty());
    }

    #[test]
    fn test_submit_appends_echoed_record() {
        let mut model = Model::new();
        model.form.title = "Carrot".to_string();
        model.form.amount = "3".to_string();

        let result = update(model, Message::Form(FormMessage::Submit));
        let request = remote_request(&result.commands);

        let result = update(
            result.model,
            settled(&request, Ok(json!({ "name": "gen-1" }))),
        );
        assert_eq!(
            result.model.ingredients.items(),
            &[Ingredient::new("gen-1", "Carrot", "3")]
        );
        assert!(!result.model.request.loading());
        assert_eq!(result.model.request.error(), None);
    }

    #[test]
    fn test_overlapping_submits_both_append() {
        let mut model = Model::new();
        model.form.title = "Carrot".to_string();
        model.form.amount = "3".to_string();
        let result = update(model, Message::Form(FormMessage::Submit));
        let first = remote_request(&result.commands);

        let mut model = result.model;
        model.form.title = "Onion".to_string();
        model.form.amount = "1".to_string();
        let result = update(model, Message::Form(FormMessage::Submit));
        let second = remote_request(&result.commands);

        // The second create settles first; the first is still a stored record
        let result = update(result.model, settled(&second, Ok(json!({ "name": "gen-2" }))));
        assert!(result.model.request.loading());
        let result = update(result.model, settled(&first, Ok(json!({ "name": "gen-1" }))));

        assert_eq!(
            result.model.ingredients.items(),
            &[
                Ingredient::new("gen-2", "Onion", "1"),
                Ingredient::new("gen-1", "Carrot", "3"),
            ]
        );
        assert!(!result.model.request.loading());
    }

    #[test]
    fn test_failed_submit_sets_add_message() {
        let result = update(Model::new(), Message::Form(FormMessage::Submit));
        let request = remote_request(&result.commands);

        let result = update(
            result.model,
            settled(&request, Err(RemoteError::Status { status: 500 })),
        );
        assert!(result.model.ingredients.is_empty());
        assert_eq!(result.model.request.error(), Some(ADD_FAILED_MESSAGE));
        assert!(!result.model.request.loading());

        let result = update(result.model, Message::Remote(RemoteMessage::ClearError));
        assert_eq!(result.model.request.error(), None);
    }

    #[test]
    fn test_malformed_listing_is_a_load_failure() {
        let result = update(Model::new(), Message::Ingredients(IngredientMessage::Refresh));
        let request = remote_request(&result.commands);
        let result = update(result.model, settled(&request, Ok(json!("oops"))));
        assert_eq!(result.model.request.error(), Some(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn test_stale_filter_timer_is_ignored() {
        let result = update(Model::new(), Message::Filter(FilterMessage::Changed("a".into())));
        assert!(matches!(result.commands.as_slice(), [Command::ScheduleFilter(t)] if t == "a"));

        let result = update(result.model, Message::Filter(FilterMessage::Changed("ab".into())));
        let result = update(result.model, Message::Filter(FilterMessage::Elapsed("a".into())));
        assert!(result.commands.is_empty());

        let result = update(result.model, Message::Filter(FilterMessage::Elapsed("ab".into())));
        let request = remote_request(&result.commands);
        assert_eq!(
            request.tag,
            RequestTag::Load {
                filter: Some("ab".to_string())
            }
        );
    }

    #[test]
    fn test_superseded_load_is_not_applied() {
        let result = update(Model::new(), Message::Ingredients(IngredientMessage::Refresh));
        let first = remote_request(&result.commands);
        let result = update(result.model, Message::Ingredients(IngredientMessage::Refresh));
        let second = remote_request(&result.commands);

        let result = update(
            result.model,
            settled(&second, Ok(json!({ "b": { "title": "New", "amount": "1" } }))),
        );
        let result = update(
            result.model,
            settled(&first, Ok(json!({ "a": { "title": "Old", "amount": "1" } }))),
        );

        assert_eq!(result.model.ingredients.items()[0].id, "b");
        assert_eq!(result.model.ingredients.len(), 1);
    }

    #[test]
    fn test_remove_selected() {
        let mut model = Model::new();
        model.ingredients.append(Ingredient::new("a", "Salt", "1"));
        model.ingredients.append(Ingredient::new("b", "Pepper", "2"));
        model.focus = Focus::List;
        model.selected = Some(1);

        let result = update(model, Message::Ingredients(IngredientMessage::RemoveSelected));
        let request = remote_request(&result.commands);
        assert_eq!(request.tag.slot(request.seq), RequestSlot::Remove("b".to_string()));

        let result = update(result.model, settled(&request, Ok(Value::Null)));
        assert_eq!(result.model.ingredients.items(), &[Ingredient::new("a", "Salt", "1")]);
        assert_eq!(result.model.selected, Some(0));
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut model = Model::new();
        model.ingredients.append(Ingredient::new("a", "Salt", "1"));
        model.ingredients.append(Ingredient::new("b", "Pepper", "2"));

        let result = update(model, Message::UI(UIMessage::SelectPrevious));
        assert_eq!(result.model.selected, Some(0));
        let result = update(result.model, Message::UI(UIMessage::SelectNext));
        let result = update(result.model, Message::UI(UIMessage::SelectNext));
        assert_eq!(result.model.selected, Some(1));
    }
}
