//! Provider avatar: the photo when one is set, initials otherwise

use dioxus::prelude::*;
use fleet_core::ProviderIdentity;

#[component]
pub fn Avatar(identity: ProviderIdentity, #[props(default = 36)] size: u32) -> Element {
    let style = format!("width: {size}px; height: {size}px; font-size: {}px;", size * 2 / 5);

    if identity.photo_url.is_empty() {
        let initials = identity.initials();
        rsx! {
            span {
                class: "avatar avatar--initials",
                style: "{style}",
                title: "{identity.display_name}",
                "{initials}"
            }
        }
    } else {
        rsx! {
            img {
                class: "avatar",
                style: "{style}",
                src: "{identity.photo_url}",
                alt: "{identity.display_name}",
            }
        }
    }
}
