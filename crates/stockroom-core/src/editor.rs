//! # Product List Editor
//!
//! View state behind the product list screen: inline editing, the add
//! form, deletion, and search.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Operations                              │
//! │                                                                         │
//! │  UI Action            Editor Call              Caller Then              │
//! │  ─────────            ───────────              ───────────              │
//! │                                                                         │
//! │  Click "Sửa" ───────► begin_edit(id)                                    │
//! │  Type in row ───────► edit_form_mut()                                   │
//! │  Click "Lưu" ───────► prepare_save() ────────► PUT, GET, finish_save()  │
//! │  Click "Hủy" ───────► cancel_edit()                                     │
//! │                                                                         │
//! │  Click "+ Thêm" ────► toggle_add_form()                                 │
//! │  Click "Tạo" ───────► prepare_create() ──────► POST, GET,               │
//! │                                                finish_create()          │
//! │                                                                         │
//! │  Click "Xóa" ───────► mark_deleting(id) ─────► DELETE, GET,             │
//! │                                                finish_delete()          │
//! │                                                                         │
//! │  Any request fails ─► fail(operation)                                   │
//! │                                                                         │
//! │  NOTE: The list is never patched locally. Every mutation is followed   │
//! │        by a full refresh from the backend.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The editor performs no I/O. It tells the caller what to send and accepts
//! the refreshed list back.

use crate::error::{CoreError, CoreResult};
use crate::search::filter_products;
use crate::types::{ProductDraft, ProductDto, ProductPayload};
use crate::validation::{validate_product_id, validate_product_payload};

/// A backend round-trip the list screen performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOperation {
    Load,
    Update,
    Delete,
    Create,
}

impl ListOperation {
    /// Banner text shown when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            ListOperation::Load => "Không thể tải danh sách sản phẩm. Vui lòng thử lại.",
            ListOperation::Update => "Không thể cập nhật sản phẩm. Vui lòng thử lại.",
            ListOperation::Delete => "Không thể xóa sản phẩm. Vui lòng thử lại.",
            ListOperation::Create => "Không thể tạo sản phẩm. Vui lòng thử lại.",
        }
    }
}

/// The row currently in edit mode and its working copy.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: String,
    pub form: ProductDraft,
}

/// State of the product list screen.
///
/// ## Invariants
/// - At most one row is in edit mode
/// - `products` only changes through a refresh from the backend
#[derive(Debug, Clone, Default)]
pub struct ProductListEditor {
    products: Vec<ProductDto>,
    editing: Option<EditSession>,
    deleting: Option<String>,
    show_add_form: bool,
    new_product: ProductDraft,
    search_term: String,
    error: Option<String>,
}

impl ProductListEditor {
    /// Creates an editor with an empty list and a blank add form.
    pub fn new() -> Self {
        ProductListEditor {
            new_product: ProductDraft::from(&ProductPayload::empty()),
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // List
    // -------------------------------------------------------------------------

    /// Replaces the list with a fresh copy from the backend.
    pub fn replace_products(&mut self, products: Vec<ProductDto>) {
        self.products = products;
        self.error = None;
    }

    pub fn products(&self) -> &[ProductDto] {
        &self.products
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Products matching the current search term.
    pub fn visible_products(&self) -> Vec<&ProductDto> {
        filter_products(&self.products, &self.search_term)
    }

    /// Records a failed round-trip and clears its in-flight marker.
    pub fn fail(&mut self, operation: ListOperation) {
        if operation == ListOperation::Delete {
            self.deleting = None;
        }
        self.error = Some(operation.failure_message().to_string());
    }

    /// Current banner message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // -------------------------------------------------------------------------
    // Inline edit
    // -------------------------------------------------------------------------

    /// Puts a row into edit mode with a copy of its current values.
    ///
    /// Any edit already in progress is discarded.
    pub fn begin_edit(&mut self, id: &str) -> CoreResult<()> {
        validate_product_id(id)?;

        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        self.editing = Some(EditSession {
            id: product.id.clone(),
            form: ProductDraft::from(product),
        });
        Ok(())
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|s| s.id == id)
    }

    /// Mutable access to the working copy of the row being edited.
    pub fn edit_form_mut(&mut self) -> CoreResult<&mut ProductDraft> {
        self.editing
            .as_mut()
            .map(|s| &mut s.form)
            .ok_or(CoreError::NotEditing)
    }

    /// Leaves edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Builds the update request for the row being edited.
    ///
    /// The form goes through [`ProductPayload::from_draft`], so the name is
    /// trimmed and price and stock are sent as numbers.
    pub fn prepare_save(&mut self) -> CoreResult<(String, ProductPayload)> {
        let session = self.editing.as_ref().ok_or(CoreError::NotEditing)?;
        self.error = None;
        Ok((session.id.clone(), ProductPayload::from_draft(&session.form)))
    }

    /// Applies the refreshed list after a successful update.
    pub fn finish_save(&mut self, refreshed: Vec<ProductDto>) {
        self.replace_products(refreshed);
        self.editing = None;
    }

    // -------------------------------------------------------------------------
    // Add form
    // -------------------------------------------------------------------------

    pub fn toggle_add_form(&mut self) {
        self.show_add_form = !self.show_add_form;
    }

    pub fn is_add_form_open(&self) -> bool {
        self.show_add_form
    }

    pub fn new_product_mut(&mut self) -> &mut ProductDraft {
        &mut self.new_product
    }

    /// Normalises and checks the add form, returning the create request body.
    ///
    /// The check runs on the normalised payload, so a non-numeric price has
    /// already become `0` by then. A failure is also shown in the banner.
    pub fn prepare_create(&mut self) -> CoreResult<ProductPayload> {
        self.error = None;
        let payload = ProductPayload::from_draft(&self.new_product);

        if let Err(e) = validate_product_payload(&ProductDraft::from(&payload)) {
            self.error = Some(e.to_string());
            return Err(e.into());
        }

        Ok(payload)
    }

    /// Applies the refreshed list after a successful create and resets the form.
    pub fn finish_create(&mut self, refreshed: Vec<ProductDto>) {
        self.replace_products(refreshed);
        self.show_add_form = false;
        self.new_product = ProductDraft::from(&ProductPayload::empty());
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    /// Marks a row as being deleted (disables its buttons).
    pub fn mark_deleting(&mut self, id: &str) -> CoreResult<()> {
        if !self.products.iter().any(|p| p.id == id) {
            return Err(CoreError::ProductNotFound(id.to_string()));
        }
        self.deleting = Some(id.to_string());
        self.error = None;
        Ok(())
    }

    pub fn deleting(&self) -> Option<&str> {
        self.deleting.as_deref()
    }

    /// Applies the refreshed list after a successful delete.
    pub fn finish_delete(&mut self, refreshed: Vec<ProductDto>) {
        self.replace_products(refreshed);
        self.deleting = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::NumericInput;

    const LAPTOP_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
    const MOUSE_ID: &str = "6f1c2d3e-4b5a-4c6d-8e7f-901234567890";

    fn product(id: &str, name: &str, price: f64) -> ProductDto {
        ProductDto {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price,
            stock_quantity: 5,
            status: None,
        }
    }

    fn loaded_editor() -> ProductListEditor {
        let mut editor = ProductListEditor::new();
        editor.replace_products(vec![
            product(LAPTOP_ID, "Laptop Dell", 15_000_000.0),
            product(MOUSE_ID, "Mouse", 250_000.0),
        ]);
        editor
    }

    #[test]
    fn test_new_editor_has_blank_add_form() {
        let mut editor = ProductListEditor::new();
        assert!(editor.products().is_empty());
        assert!(!editor.is_add_form_open());
        let draft = editor.new_product_mut();
        assert_eq!(draft.name.as_deref(), Some(""));
        assert_eq!(draft.status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn test_edit_then_save() {
        let mut editor = loaded_editor();
        editor.begin_edit(LAPTOP_ID).unwrap();
        assert!(editor.is_editing(LAPTOP_ID));

        let form = editor.edit_form_mut().unwrap();
        form.price = Some(NumericInput::Number(14_000_000.0));

        let (id, payload) = editor.prepare_save().unwrap();
        assert_eq!(id, LAPTOP_ID);
        assert_eq!(payload.price, 14_000_000.0);
        assert_eq!(payload.description, "");
        assert_eq!(payload.status, "ACTIVE");

        editor.finish_save(vec![product(LAPTOP_ID, "Laptop Dell", 14_000_000.0)]);
        assert!(editor.editing().is_none());
        assert_eq!(editor.products()[0].price, 14_000_000.0);
    }

    #[test]
    fn test_save_normalises_edit_form() {
        let mut editor = loaded_editor();
        editor.begin_edit(MOUSE_ID).unwrap();

        let form = editor.edit_form_mut().unwrap();
        form.name = Some("  Chuột không dây ".into());
        form.price = Some("0x10".into());
        form.stock_quantity = Some("abc".into());

        let (_, payload) = editor.prepare_save().unwrap();
        assert_eq!(payload.name, "Chuột không dây");
        assert_eq!(payload.price, 16.0);
        assert_eq!(payload.stock_quantity, 0.0);
    }

    #[test]
    fn test_cancel_discards_changes() {
        let mut editor = loaded_editor();
        editor.begin_edit(MOUSE_ID).unwrap();
        editor.edit_form_mut().unwrap().name = Some("Chuột".into());
        editor.cancel_edit();

        assert!(editor.editing().is_none());
        assert_eq!(editor.products()[1].name, "Mouse");
        assert!(matches!(editor.prepare_save(), Err(CoreError::NotEditing)));
    }

    #[test]
    fn test_begin_edit_switches_rows() {
        let mut editor = loaded_editor();
        editor.begin_edit(LAPTOP_ID).unwrap();
        editor.begin_edit(MOUSE_ID).unwrap();
        assert!(!editor.is_editing(LAPTOP_ID));
        assert!(editor.is_editing(MOUSE_ID));
    }

    #[test]
    fn test_begin_edit_unknown_or_malformed_id() {
        let mut editor = loaded_editor();
        let unknown = "00000000-0000-0000-0000-000000000001";
        assert!(matches!(
            editor.begin_edit(unknown),
            Err(CoreError::ProductNotFound(id)) if id == unknown
        ));
        assert!(matches!(
            editor.begin_edit("not-a-uuid"),
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
        assert!(matches!(editor.edit_form_mut(), Err(CoreError::NotEditing)));
    }

    #[test]
    fn test_create_flow() {
        let mut editor = loaded_editor();
        editor.toggle_add_form();
        assert!(editor.is_add_form_open());

        let draft = editor.new_product_mut();
        draft.name = Some("  Keyboard  ".into());
        draft.price = Some("350000".into());
        draft.stock_quantity = Some("12".into());

        let payload = editor.prepare_create().unwrap();
        assert_eq!(payload.name, "Keyboard");
        assert_eq!(payload.price, 350_000.0);
        assert_eq!(payload.stock_quantity, 12.0);

        editor.finish_create(vec![product(LAPTOP_ID, "Laptop Dell", 1.0)]);
        assert!(!editor.is_add_form_open());
        assert_eq!(editor.new_product_mut().name.as_deref(), Some(""));
        assert_eq!(editor.products().len(), 1);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut editor = loaded_editor();
        editor.new_product_mut().name = Some("   ".into());

        assert!(matches!(
            editor.prepare_create(),
            Err(CoreError::Validation(ValidationError::ProductNameRequired))
        ));
        assert_eq!(editor.error(), Some("Tên sản phẩm không được để trống"));
    }

    #[test]
    fn test_create_normalises_before_checking() {
        let mut editor = loaded_editor();
        let draft = editor.new_product_mut();
        draft.name = Some("Cable".into());
        draft.price = Some("abc".into());

        let payload = editor.prepare_create().unwrap();
        assert_eq!(payload.price, 0.0);
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let mut editor = loaded_editor();
        let draft = editor.new_product_mut();
        draft.name = Some("Cable".into());
        draft.price = Some((-1i64).into());

        assert!(editor.prepare_create().is_err());
        assert_eq!(editor.error(), Some("Giá phải là số >= 0"));
    }

    #[test]
    fn test_delete_flow() {
        let mut editor = loaded_editor();
        editor.mark_deleting(MOUSE_ID).unwrap();
        assert_eq!(editor.deleting(), Some(MOUSE_ID));

        editor.finish_delete(vec![product(LAPTOP_ID, "Laptop Dell", 1.0)]);
        assert_eq!(editor.deleting(), None);
        assert_eq!(editor.products().len(), 1);

        assert!(matches!(
            editor.mark_deleting(MOUSE_ID),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_failed_delete_clears_marker() {
        let mut editor = loaded_editor();
        editor.mark_deleting(LAPTOP_ID).unwrap();
        editor.fail(ListOperation::Delete);

        assert_eq!(editor.deleting(), None);
        assert_eq!(
            editor.error(),
            Some("Không thể xóa sản phẩm. Vui lòng thử lại.")
        );
        assert_eq!(editor.products().len(), 2);
    }

    #[test]
    fn test_refresh_clears_error() {
        let mut editor = loaded_editor();
        editor.fail(ListOperation::Load);
        assert!(editor.error().is_some());

        editor.replace_products(Vec::new());
        assert!(editor.error().is_none());
    }

    #[test]
    fn test_search_filters_visible_products() {
        let mut editor = loaded_editor();
        editor.set_search_term("MOU");
        let visible = editor.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, MOUSE_ID);

        editor.set_search_term("");
        assert_eq!(editor.visible_products().len(), 2);
    }
}
