//! The upload gate component
//!
//! `UploadGate` intercepts the upload form's submit event, validates the
//! selected filename, and either navigates to the error page or swaps the
//! submit control for a progress spinner before letting the native
//! submission proceed. It is constructed once per page from the document
//! and holds read-only references to the elements it works with.

use thiserror::Error;
use upload_gate_core::{validate_file_name, ErrorKind, ErrorRedirect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, Window};

use crate::spinner;

/// Id of the upload form itself.
pub const UPLOAD_FORM_ID: &str = "uploadForm";
/// Id of the file input inside the form.
pub const FILE_INPUT_ID: &str = "file-upload";
/// Hidden field carrying the error page base URL.
pub const REDIRECT_BASE_ID: &str = "upScanErrorRedirectUrl";
/// Hidden field carrying the upload request id.
pub const REQUEST_ID_ID: &str = "x-amz-meta-request-id";

// Some templates render the request id field with a name instead of an id.
const REQUEST_ID_NAME_SELECTOR: &str = "input[name='x-amz-meta-request-id']";

const PROCESSING_CONTAINER_ID: &str = "processing";
const PROCESSING_MESSAGE_ID: &str = "processingMessage";
const SUBMIT_CONTROL_ID: &str = "submit";
const FILE_UPLOAD_ERROR_ID: &str = "file-upload-error";
const ERROR_SUMMARY_ID: &str = "error-summary";
const ERROR_GROUP_CLASS: &str = "govuk-form-group--error";

/// Failure to resolve the DOM contract the gate depends on.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("required element #{0} is missing")]
    MissingElement(&'static str),

    #[error("element #{selector} is not a {expected} element")]
    WrongElementType {
        selector: &'static str,
        expected: &'static str,
    },
}

impl From<GateError> for JsValue {
    fn from(err: GateError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Transient snapshot of the form state taken at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAttempt {
    pub selected_file_name: Option<String>,
    pub request_id: Option<String>,
    pub redirect_base: String,
}

impl UploadAttempt {
    /// The encoded error URL for a rejected attempt.
    pub fn error_url(&self, kind: ErrorKind) -> String {
        ErrorRedirect::new(&self.redirect_base, kind, self.request_id.as_deref()).to_url()
    }
}

/// Pre-submission validation and UI state transition for the upload form.
#[derive(Debug)]
pub struct UploadGate {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    file_input: HtmlInputElement,
    redirect_base: HtmlInputElement,
    request_id: Option<HtmlInputElement>,
    processing: Option<Element>,
    processing_message: Option<HtmlInputElement>,
}

impl UploadGate {
    /// Resolve the gate's DOM contract.
    ///
    /// The form, the file input, and the error redirect base are required;
    /// everything else is an optional capability and the behavior that
    /// depends on it is skipped when the element is absent.
    pub fn new(window: Window, document: Document) -> Result<Self, GateError> {
        let form = require(&document, UPLOAD_FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| GateError::WrongElementType {
                selector: UPLOAD_FORM_ID,
                expected: "form",
            })?;
        let file_input = require_input(&document, FILE_INPUT_ID)?;
        let redirect_base = require_input(&document, REDIRECT_BASE_ID)?;

        let request_id = optional_input(&document, REQUEST_ID_ID).or_else(|| {
            document
                .query_selector(REQUEST_ID_NAME_SELECTOR)
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into().ok())
        });
        let processing = document.get_element_by_id(PROCESSING_CONTAINER_ID);
        let processing_message = optional_input(&document, PROCESSING_MESSAGE_ID);

        Ok(Self {
            window,
            document,
            form,
            file_input,
            redirect_base,
            request_id,
            processing,
            processing_message,
        })
    }

    /// Attach the submit handler; the gate then lives for the rest of the
    /// page.
    pub fn install(self) -> Result<(), JsValue> {
        let form = self.form.clone();
        let handler = Closure::wrap(Box::new(move |event: Event| {
            if let Err(err) = self.handle_submit(&event) {
                web_sys::console::error_2(&JsValue::from_str("upload gate submit failed"), &err);
            }
        }) as Box<dyn FnMut(Event)>);
        form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
        handler.forget();
        Ok(())
    }

    /// Intercept a submission: a rejected file navigates to the error page,
    /// an accepted one shows the spinner and resumes the native submit.
    pub fn handle_submit(&self, event: &Event) -> Result<(), JsValue> {
        event.prevent_default();

        let attempt = self.snapshot();
        match validate_file_name(attempt.selected_file_name.as_deref()) {
            Err(kind) => self.window.location().set_href(&attempt.error_url(kind)),
            Ok(()) => {
                self.present_uploading_state()?;
                self.defer_native_submit()
            }
        }
    }

    /// Snapshot the form state for one attempt.
    pub fn snapshot(&self) -> UploadAttempt {
        UploadAttempt {
            selected_file_name: self.selected_file_name(),
            request_id: self.request_id.as_ref().map(|input| input.value()),
            redirect_base: self.redirect_base.value(),
        }
    }

    /// Name of the selected file, or `None` when the control holds no file.
    pub fn selected_file_name(&self) -> Option<String> {
        let files = self.file_input.files()?;
        files.get(0).map(|file| file.name())
    }

    /// The encoded error URL for a rejection of the current form state.
    pub fn error_url(&self, kind: ErrorKind) -> String {
        self.snapshot().error_url(kind)
    }

    /// Clear any server-rendered error presentation and show the spinner.
    pub fn present_uploading_state(&self) -> Result<(), JsValue> {
        self.clear_error_presentation()?;

        if let Some(container) = &self.processing {
            let label = self
                .processing_message
                .as_ref()
                .map(|input| input.value())
                .unwrap_or_default();
            container.set_inner_html("");
            container.append_child(&spinner::build(&self.document, &label)?.into())?;
        }
        Ok(())
    }

    fn clear_error_presentation(&self) -> Result<(), JsValue> {
        // getElementsByClassName is live: removing the class shrinks the
        // collection, so snapshot it first.
        let flagged = self.document.get_elements_by_class_name(ERROR_GROUP_CLASS);
        let flagged: Vec<Element> = (0..flagged.length()).filter_map(|i| flagged.item(i)).collect();
        for element in flagged {
            element.class_list().remove_1(ERROR_GROUP_CLASS)?;
        }

        for id in [FILE_UPLOAD_ERROR_ID, ERROR_SUMMARY_ID, SUBMIT_CONTROL_ID] {
            if let Some(element) = self.document.get_element_by_id(id) {
                element.remove();
            }
        }
        Ok(())
    }

    /// Resume the native submission on the next event-loop turn so the
    /// spinner paints first. The callback fires exactly once.
    fn defer_native_submit(&self) -> Result<(), JsValue> {
        let form = self.form.clone();
        let file_input = self.file_input.clone();
        let resume = Closure::once(move || resume_native_submit(form, file_input));
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                resume.as_ref().unchecked_ref(),
                0,
            )?;
        resume.forget();
        Ok(())
    }
}

/// Body of the deferred callback. The input is disabled only after
/// `submit()` so the file stays part of the submitted form data.
fn resume_native_submit(form: HtmlFormElement, file_input: HtmlInputElement) {
    if let Err(err) = form.submit() {
        web_sys::console::error_2(&JsValue::from_str("native submit failed"), &err);
    }
    file_input.set_disabled(true);
}

fn require(document: &Document, id: &'static str) -> Result<Element, GateError> {
    document
        .get_element_by_id(id)
        .ok_or(GateError::MissingElement(id))
}

fn require_input(document: &Document, id: &'static str) -> Result<HtmlInputElement, GateError> {
    require(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| GateError::WrongElementType {
            selector: id,
            expected: "input",
        })
}

fn optional_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}
