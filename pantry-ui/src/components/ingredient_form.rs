//! Ingredient Form Component
//!
//! Modal form bound to the draft of an [`IngredientsView`].

use leptos::*;
use pantry::view::{FormMode, IngredientsView};
use pantry::IngredientDraft;

/// Which draft field an input edits
#[derive(Clone, Copy)]
enum Field {
    Name,
    ExpiryDate,
    Quantity,
    Category,
}

impl Field {
    fn get(self, draft: &IngredientDraft) -> String {
        match self {
            Field::Name => draft.name.clone(),
            Field::ExpiryDate => draft.expiry_date.clone(),
            Field::Quantity => draft.quantity.clone(),
            Field::Category => draft.category.clone(),
        }
    }

    fn set(self, draft: &mut IngredientDraft, value: String) {
        match self {
            Field::Name => draft.name = value,
            Field::ExpiryDate => draft.expiry_date = value,
            Field::Quantity => draft.quantity = value,
            Field::Category => draft.category = value,
        }
    }
}

/// Add/edit ingredient modal
#[component]
pub fn IngredientForm(
    state: RwSignal<IngredientsView>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = move || state.with(|s| matches!(s.form(), FormMode::Editing(_)));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <h3 class="text-xl font-semibold mb-6">
                    {move || if editing() { "Edit Ingredient" } else { "Add New Ingredient" }}
                </h3>

                <form on:submit=submit class="space-y-4">
                    <FormInput state=state field=Field::Name label="Name *" input_type="text" placeholder="" required=true />
                    <FormInput state=state field=Field::ExpiryDate label="Expiry Date *" input_type="date" placeholder="" required=true />
                    <FormInput state=state field=Field::Quantity label="Quantity" input_type="text"
                        placeholder="e.g., 1 gallon, 500g, 6 pieces" required=false />
                    <FormInput state=state field=Field::Category label="Category" input_type="text"
                        placeholder="e.g., Dairy, Meat, Fruit" required=false />

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_cancel.call(())
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            {move || if editing() { "Update Ingredient" } else { "Add Ingredient" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FormInput(
    state: RwSignal<IngredientsView>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || state.with(|s| field.get(s.draft()))
                on:input=move |ev| state.update(|s| field.set(s.draft_mut(), event_target_value(&ev)))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
