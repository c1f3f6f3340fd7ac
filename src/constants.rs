// Page anchors and defaults – the single source of truth for every selector
// the server-rendered templates are expected to provide.

// Reorderable link list
pub const REORDER_LIST_ID: &str = "links"; // legacy id kept by the templates
pub const REORDER_LIST_SELECTOR: &str = "[data-reorder-list]";
pub const ROW_CLASS: &str = "row";
pub const DRAGGING_CLASS: &str = "dragging";
pub const STATUS_ID: &str = "status";
pub const STATUS_SELECTOR: &str = "[data-reorder-status]";
pub const DEFAULT_REORDER_URL: &str = "/profiles/links/reorder/";

// Status announcements
pub const STATUS_SAVING: &str = "Reordered. Saving…";
pub const STATUS_SAVED: &str = "Saved order.";
pub const STATUS_FAILED: &str = "Could not save order.";

// CSRF
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

// Profile form
pub const PROFILE_FORM_SELECTOR: &str = "form.profile-shell";
pub const BIO_EDITABLE_SELECTORS: [&str; 4] = [
    "[contenteditable=\"true\"][name=\"bio\"]",
    ".editable-area.bio[contenteditable=\"true\"]",
    "[data-bio-editable]",
    "[x-ref=\"bioEditable\"]",
];
pub const BIO_FIELD_SELECTOR: &str =
    "textarea[name=\"bio\"], input[type=\"hidden\"][name=\"bio\"], input[type=\"text\"][name=\"bio\"]";
pub const HANDLE_INPUT_SELECTOR: &str = "input[name=\"handle\"]";
pub const HANDLE_ERROR_SELECTOR: &str = "[data-handle-error]";
pub const HANDLE_MIN_LEN: usize = 5;
pub const HANDLE_TOO_SHORT: &str = "Handle must be at least 5 characters.";
pub const AVATAR_INPUT_SELECTOR: &str = "input[type=\"file\"][name=\"profile_image\"]";
pub const AVATAR_PREVIEW_ID: &str = "avatarPreview";
pub const SAVE_PROFILE_SELECTOR: &str = "[data-action=\"save-profile\"]";

// Link formset
pub const TOTAL_FORMS_SELECTOR: &str = "input[name$=\"-TOTAL_FORMS\"]";
pub const TOTAL_FORMS_SUFFIX: &str = "-TOTAL_FORMS";
pub const FORMSET_CONTAINER_SELECTOR: &str = "[data-formset-container]";
pub const FORMSET_CONTAINER_ID: &str = "linksList";
pub const EMPTY_FORM_TEMPLATE_ID: &str = "empty-form-template";
pub const FORM_PREFIX_PLACEHOLDER: &str = "__prefix__";
pub const FORM_ROW_SELECTOR: &str = "[data-form-row]";
pub const ROW_ACTION_SELECTOR: &str = "[data-link-row-action]";
pub const ADD_LINK_SELECTOR: &str = "[data-action=\"add-link\"]";
pub const EDITED_PILL_SELECTOR: &str = "[data-edited-pill]";
pub const CONFIRM_DELETE_LINK: &str = "Delete this link?";

// Navigation, modal, profile page widgets
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const SITE_NAV_ID: &str = "site-nav";
pub const MODAL_ID: &str = "generic-modal";
pub const COPY_LINK_SELECTOR: &str = "[data-action=\"copy-link\"]";
pub const COPY_FEEDBACK_MS: u32 = 2000;
pub const HANDLE_LOOKUP_ID: &str = "handleLookup";
pub const GOTO_HANDLE_SELECTOR: &str = "[data-action=\"goto-handle\"]";
pub const PROFILE_SAVED_EVENT: &str = "profile:saved";
pub const PROFILE_LINK_SELECTOR: &str = "#profile-link, a[data-profile-link]";
pub const PROFILE_HANDLE_SELECTOR: &str = "[data-profile-handle]";
