use crate::content::{CONTACT_CTA, OWNER_NAME, RESUME_CTA, ROLE, TAGLINE};
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {<main style="position:relative; z-index:10; display:flex; flex-direction:column; align-items:center; justify-content:center; text-align:center; padding:80px 32px; max-width:1024px; margin:0 auto;">
        <h2 style="font-size:48px; font-weight:700; margin:0 0 12px 0;">{ OWNER_NAME }</h2>
        <p style="font-size:20px; color:#d1d5db; margin:0 0 24px 0;">{ ROLE }</p>
        <p style="max-width:448px; margin:0 0 32px 0; color:#9ca3af; line-height:1.5;">{ TAGLINE }</p>
        <div style="display:flex; gap:16px;">
            <a href={RESUME_CTA.href} style="padding:10px 20px; border:1px solid #6366f1; border-radius:6px; background:#6366f1; color:#ffffff; text-decoration:none;">{ RESUME_CTA.label }</a>
            <a href={CONTACT_CTA.href} style="padding:10px 20px; border:1px solid #6366f1; border-radius:6px; color:#a5b4fc; text-decoration:none;">{ CONTACT_CTA.label }</a>
        </div>
    </main>}
}
