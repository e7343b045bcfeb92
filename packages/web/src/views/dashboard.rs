//! Dashboard view: expense form, history list, and running total.

use api::ExpenseInfo;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{format_inr, parse_amount, total_amount, LogoutButton};

/// Dashboard page component.
///
/// The form runs in one of two modes over `edit_id`: absent means submit
/// inserts a new expense, present means submit overwrites the referenced
/// record. Every mutation is followed by a full refetch of the list; nothing
/// is patched in place.
#[component]
pub fn Dashboard() -> Element {
    let mut user = use_signal(|| Option::<api::UserInfo>::None);
    let mut expenses = use_signal(Vec::<ExpenseInfo>::new);

    let mut title = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut category = use_signal(String::new);

    let mut edit_id = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    // Session check on mount. No session means back to login before any
    // data is fetched.
    let _checker = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(current)) => {
                user.set(Some(current));
                expenses.set(api::list_expenses().await.unwrap_or_default());
            }
            _ => {
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
            }
        }
        loading.set(false);
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if user().is_none() {
                return;
            }

            // Mutation errors are not inspected; the refetch below decides
            // what the list shows.
            if let Some(id) = edit_id() {
                let _ = api::update_expense(id, title(), parse_amount(&amount()), category()).await;
                edit_id.set(None);
            } else {
                let _ = api::create_expense(title(), parse_amount(&amount()), category()).await;
            }

            title.set(String::new());
            amount.set(String::new());
            category.set(String::new());

            expenses.set(api::list_expenses().await.unwrap_or_default());
        });
    };

    let mut handle_edit = move |expense: ExpenseInfo| {
        title.set(expense.title.clone());
        amount.set(expense.amount.to_string());
        category.set(expense.category.clone());
        edit_id.set(Some(expense.id.clone()));
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let _ = api::delete_expense(id).await;
            expenses.set(api::list_expenses().await.unwrap_or_default());
        });
    };

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    let expense_list = expenses();
    let total = total_amount(&expense_list);

    rsx! {
        div {
            class: "dashboard-page",

            div {
                class: "dashboard-card",

                div {
                    class: "dashboard-header",
                    h1 { "Expense Manager" }
                    LogoutButton { class: "btn btn-primary" }
                }

                div {
                    class: "total-card",
                    div {
                        p { class: "total-label", "Total Expenses" }
                        h2 { class: "total-value", "₹ {format_inr(total)}" }
                    }
                    div { class: "record-count", "{expense_list.len()} records" }
                }

                div {
                    class: "dashboard-grid",

                    div {
                        class: "panel",
                        h3 {
                            class: "panel-title",
                            if edit_id().is_some() { "Edit Expense" } else { "Add New Expense" }
                        }

                        form {
                            onsubmit: handle_submit,
                            class: "expense-form",

                            Input {
                                placeholder: "Title",
                                required: true,
                                value: title(),
                                oninput: move |evt: FormEvent| title.set(evt.value()),
                            }

                            Input {
                                r#type: "number",
                                placeholder: "Amount",
                                required: true,
                                value: amount(),
                                oninput: move |evt: FormEvent| amount.set(evt.value()),
                            }

                            Input {
                                placeholder: "Category",
                                required: true,
                                value: category(),
                                oninput: move |evt: FormEvent| category.set(evt.value()),
                            }

                            Button {
                                variant: ButtonVariant::Primary,
                                class: "w-full",
                                r#type: "submit",
                                if edit_id().is_some() { "Update Expense" } else { "Add Expense" }
                            }

                            if edit_id().is_some() {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    class: "w-full",
                                    onclick: move |_: MouseEvent| {
                                        edit_id.set(None);
                                        title.set(String::new());
                                        amount.set(String::new());
                                        category.set(String::new());
                                    },
                                    "Cancel"
                                }
                            }
                        }
                    }

                    div {
                        class: "panel",
                        h3 { class: "panel-title", "Expense History" }

                        if expense_list.is_empty() {
                            p { class: "empty-state", "No expenses yet." }
                        } else {
                            for expense in expense_list.clone() {
                                div {
                                    key: "{expense.id}",
                                    class: "expense-row",

                                    div {
                                        class: "expense-info",
                                        p { class: "expense-title", "{expense.title}" }
                                        p { class: "expense-meta", "₹{expense.amount} • {expense.category}" }
                                    }

                                    div {
                                        class: "expense-actions",
                                        button {
                                            class: "action-link edit",
                                            onclick: {
                                                let expense = expense.clone();
                                                move |_| handle_edit(expense.clone())
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "action-link delete",
                                            onclick: {
                                                let id = expense.id.clone();
                                                move |_| handle_delete(id.clone())
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
