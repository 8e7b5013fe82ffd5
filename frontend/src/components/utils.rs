use super::super::{Model, Msg};
use crate::services::BatchImage;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use shared::i18n::NoticeKind;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use web_sys::FileList;
use yew::prelude::*;

pub fn generate_id() -> u64 {
    static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
    let now = Date::now() as u64;
    let count = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    now * 1000 + (count % 1000)
}

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Every file in the list, images or not. Filtering happens in intake so the
/// picker and the drop zone share one rule.
pub fn extract_files(file_list: &FileList) -> Vec<BatchImage> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(|file| BatchImage::Uploaded(GlooFile::from(file)))
        .collect()
}

pub fn render_notice(model: &Model, ctx: &Context<Model>) -> Html {
    let Some((id, notice)) = &model.notice else {
        return html! {};
    };
    let id = *id;
    let kind_class = match notice.kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Error => "notice-error",
    };
    let icon = match notice.kind {
        NoticeKind::Success => "fa-solid fa-circle-check",
        NoticeKind::Error => "fa-solid fa-circle-exclamation",
    };

    html! {
        <div class={classes!("notice", kind_class)} role="status">
            <i class={icon}></i>
            <div class="notice-text">
                <p class="notice-title">{ &notice.title }</p>
                <p class="notice-body">{ &notice.body }</p>
            </div>
            <button
                class="notice-close"
                title="Dismiss"
                onclick={ctx.link().callback(move |_| Msg::DismissNotice(id))}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}
