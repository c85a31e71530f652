//! Main subjects browser component
//!
//! Owns one `State<SubjectsState>`; every key press goes through
//! `key_to_action` and `reduce_subjects_state`, and network work runs in
//! async handlers that dispatch their result back as an action.

#![allow(clippy::clone_on_copy)]

use iocraft::prelude::*;

use crate::remote::HttpGateway;
use crate::tui::components::{Footer, Header, SearchBar, render_toast};
use crate::tui::theme::theme;

use super::alert_modal::AlertModal;
use super::form_modal::SubjectFormModal;
use super::model::{
    Effect, SubjectsAction, SubjectsState, compute_subjects_view_model, effect_for,
    key_to_action, reduce_subjects_state,
};
use super::operations;
use super::table::SubjectsTable;

/// Rows taken by header, search bar, column header and footer
const CHROME_HEIGHT: u16 = 5;

/// Props for the SubjectsBrowser component
#[derive(Default, Props)]
pub struct SubjectsBrowserProps {
    pub gateway: Option<HttpGateway>,
}

#[component]
pub fn SubjectsBrowser<'a>(
    props: &SubjectsBrowserProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let list_height = height.saturating_sub(CHROME_HEIGHT) as usize;

    let mut state = hooks.use_state(SubjectsState::loading);
    let gateway = props.gateway.clone();
    let base_url = gateway.as_ref().map(|g| g.base_url().to_string());

    // Apply an action produced by an async operation
    let dispatch = move |mut state: State<SubjectsState>, action: SubjectsAction| {
        let next = reduce_subjects_state(state.read().clone(), action, list_height);
        state.set(next);
    };

    let load_handler: Handler<()> = hooks.use_async_handler({
        let gateway = gateway.clone();
        let state = state.clone();

        move |()| {
            let gateway = gateway.clone();
            let state = state.clone();

            async move {
                let Some(gateway) = gateway else {
                    return;
                };
                let action = operations::load(&gateway).await;
                dispatch(state, action);
            }
        }
    });

    let save_handler: Handler<crate::types::SubjectPayload> = hooks.use_async_handler({
        let gateway = gateway.clone();
        let state = state.clone();

        move |payload| {
            let gateway = gateway.clone();
            let state = state.clone();

            async move {
                let Some(gateway) = gateway else {
                    return;
                };
                let action = operations::save(&gateway, payload).await;
                dispatch(state, action);
            }
        }
    });

    // Initial load
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        load_handler.clone()(());
    }

    hooks.use_terminal_events({
        let load_handler = load_handler.clone();
        let save_handler = save_handler.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let current = state.read().clone();
                let Some(action) = key_to_action(code, modifiers, &current) else {
                    return;
                };

                let effect = effect_for(&action, &current);
                state.set(reduce_subjects_state(current, action, list_height));

                match effect {
                    Some(Effect::Load) => load_handler(()),
                    Some(Effect::Save(payload)) => save_handler(payload),
                    None => {}
                }
            }
            _ => {}
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    let vm = compute_subjects_view_model(&state.read(), list_height);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                base_url,
                counts: Some((vm.match_count, vm.subject_count)),
                busy: vm.busy,
            )

            SearchBar(
                query: vm.search_query.clone(),
                has_focus: vm.search_focused,
                match_count: Some(vm.match_count),
            )

            SubjectsTable(
                rows: vm.rows.clone(),
                empty_state: vm.empty_state,
                search_query: Some(vm.search_query.clone()),
            )

            #(render_toast(&vm.toast))

            Footer(shortcuts: vm.shortcuts.clone())

            #(vm.form.clone().map(|form| element! {
                SubjectFormModal(form)
            }))

            AlertModal(alert: vm.alert.clone())
        }
    }
}
