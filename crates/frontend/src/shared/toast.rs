//! Small wrapper around the thaw toaster. Action buttons in this portal
//! only ever toast or navigate — nothing mutates data.

use leptos::prelude::*;
use thaw::{Toast, ToastBody, ToastTitle, ToasterInjection};

pub fn notify(toaster: &ToasterInjection, title: &str, body: &str) {
    let title = title.to_string();
    let body = body.to_string();
    toaster.dispatch_toast(
        move || {
            view! {
                <Toast>
                    <ToastTitle>{title.clone()}</ToastTitle>
                    <ToastBody>{body.clone()}</ToastBody>
                </Toast>
            }
        },
        Default::default(),
    );
}
