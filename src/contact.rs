use crate::constants::CONTACT_FORM_ID;
use crate::core::{settle, EmailService, FormFields, Notifier, CONTACT_SERVICE};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    // EmailJS browser SDK, loaded by the page as the global `emailjs`
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = sendForm)]
    fn emailjs_send_form(
        service_id: &str,
        template_id: &str,
        form: &web::HtmlFormElement,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Blocking browser alert.
struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&mut self, message: &str) {
        match web::window() {
            Some(w) => {
                _ = w.alert_with_message(message);
            }
            None => log::warn!("[contact] no window to show: {}", message),
        }
    }
}

struct HtmlForm<'f>(&'f web::HtmlFormElement);

impl FormFields for HtmlForm<'_> {
    fn reset(&mut self) {
        self.0.reset();
    }
}

/// Hand the form to EmailJS and wait for delivery.
async fn send_form(service: EmailService, form: &web::HtmlFormElement) -> anyhow::Result<()> {
    let promise = emailjs_send_form(service.service_id, service.template_id, form)
        .map_err(|e| anyhow!("emailjs unavailable: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("send rejected: {:?}", e))?;
    Ok(())
}

/// Intercept contact form submission and deliver it through EmailJS.
pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let form: web::HtmlFormElement = document
        .get_element_by_id(CONTACT_FORM_ID)
        .ok_or_else(|| anyhow!("missing #{}", CONTACT_FORM_ID))?
        .dyn_into()
        .map_err(|e| anyhow!("#{} is not a form: {:?}", CONTACT_FORM_ID, e))?;

    let target = form.clone();
    dom::add_listener(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form = form.clone();
        spawn_local(async move {
            let result = send_form(CONTACT_SERVICE, &form).await;
            if let Err(e) = &result {
                log::warn!("[contact] {:?}", e);
            }
            let outcome = settle(result, &mut HtmlForm(&form), &mut AlertNotifier);
            log::info!("[contact] submit {:?}", outcome);
        });
    });
    Ok(())
}
