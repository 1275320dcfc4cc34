//! Field descriptors for the two add-item controls on the recipe edit page,
//! plus the type discriminator sent to the server.

/// Server-side category an added value belongs to. Doubles as the selector
/// for the list the value is appended to on success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Tag,
    Ingredient,
}

impl ItemKind {
    /// Maps an input field name to its kind. Only `newTag` yields
    /// [`ItemKind::Tag`]; every other name is an ingredient.
    pub fn from_field_name(name: &str) -> Self {
        if name == "newTag" {
            ItemKind::Tag
        } else {
            ItemKind::Ingredient
        }
    }

    /// The `type` value carried in the request body.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Tag => "tag",
            ItemKind::Ingredient => "ingredient",
        }
    }

    /// Id of the multi-select list that receives appended options.
    pub fn select_id(self) -> &'static str {
        match self {
            ItemKind::Tag => "tagsSelect",
            ItemKind::Ingredient => "ingredientsSelect",
        }
    }
}

/// One of the two fixed add-item fields. The page renders the buttons; the
/// inline row and its ids are derived from `name`.
#[derive(Debug)]
pub struct FieldSpec {
    /// Name attribute of the inline text input.
    pub name: &'static str,
    /// Placeholder shown in the inline input (Norwegian, matching the page).
    pub placeholder: &'static str,
    /// Id of the pre-rendered button that toggles the inline row.
    pub button_id: &'static str,
}

impl FieldSpec {
    pub fn kind(&self) -> ItemKind {
        ItemKind::from_field_name(self.name)
    }

    /// Id carried by the inline row container. Its presence in the document
    /// is the existence check that keeps rows from being duplicated.
    pub fn row_group_id(&self) -> String {
        format!("{}FormGroup", self.name)
    }
}

/// The two fields this crate wires. Fixed set, never extended at runtime.
pub static FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        name: "newTag",
        placeholder: "Legg til ny kategori",
        button_id: "addTagBtn",
    },
    FieldSpec {
        name: "newIngredient",
        placeholder: "Legg til ny ingrediens",
        button_id: "addIngredientBtn",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tag_maps_to_tag() {
        assert_eq!(ItemKind::from_field_name("newTag"), ItemKind::Tag);
    }

    #[test]
    fn every_other_name_maps_to_ingredient() {
        for name in ["newIngredient", "newtag", "NewTag", "", "tags"] {
            assert_eq!(ItemKind::from_field_name(name), ItemKind::Ingredient);
        }
    }

    #[test]
    fn kinds_resolve_their_select_lists() {
        assert_eq!(ItemKind::Tag.select_id(), "tagsSelect");
        assert_eq!(ItemKind::Ingredient.select_id(), "ingredientsSelect");
    }

    #[test]
    fn row_group_ids_derive_from_field_names() {
        assert_eq!(FIELDS[0].row_group_id(), "newTagFormGroup");
        assert_eq!(FIELDS[1].row_group_id(), "newIngredientFormGroup");
    }

    #[test]
    fn field_table_is_consistent() {
        assert_eq!(FIELDS[0].kind(), ItemKind::Tag);
        assert_eq!(FIELDS[1].kind(), ItemKind::Ingredient);
        assert_eq!(FIELDS[0].button_id, "addTagBtn");
        assert_eq!(FIELDS[1].button_id, "addIngredientBtn");
    }
}
