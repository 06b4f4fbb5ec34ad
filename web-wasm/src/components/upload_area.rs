//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはクリックで画像を1枚選択する。
//! 2枚目が追加された場合は先のファイルを黙って置き換える。
//! ファイルはArrayBufferとして読み込み、Data URLはRust側で導出する。

use celeb_classify_common::{encode_data_url, SelectedImage, SelectionStatus, WidgetState};
use gloo::console;
use js_sys::Uint8Array;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList, FileReader};

#[component]
pub fn UploadArea(
    state: ReadSignal<WidgetState>,
    set_state: WriteSignal<WidgetState>,
) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_files = move |files: FileList| {
        // 複数ドロップでも1枚ずつ置き換えられるため、最後のファイルだけが残る
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                read_file(file, set_state);
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                handle_files(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        // ファイル選択ダイアログを開く
        let document = web_sys::window().unwrap().document().unwrap();
        let input: web_sys::HtmlInputElement = document
            .create_element("input")
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_type("file");
        input.set_accept("image/*");

        let input_for_change = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(files) = input_for_change.files() {
                handle_files(files);
            }
        }) as Box<dyn FnMut(_)>);

        input.set_onchange(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        input.click();
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <Show
                when=move || state.with(|s| s.has_file())
                fallback=|| view! {
                    <div class="upload-icon">"🏀"</div>
                    <p>"画像をドラッグ&ドロップ または クリックして選択"</p>
                    <p class="text-muted">"対応形式: JPEG, PNG（1枚のみ）"</p>
                }
            >
                <SelectedPreview state=state set_state=set_state />
            </Show>
        </div>
    }
}

/// 選択済みファイルのプレビュー表示
#[component]
fn SelectedPreview(
    state: ReadSignal<WidgetState>,
    set_state: WriteSignal<WidgetState>,
) -> impl IntoView {
    let status_text = move || {
        state.with(|s| match s.selection_status() {
            Some(SelectionStatus::Encoding) => "読み込み中...",
            Some(SelectionStatus::Ready(_)) => "準備完了",
            Some(SelectionStatus::Unreadable) => "読み込み失敗",
            None => "",
        })
    };

    let preview_url =
        move || state.with(|s| s.selected_image().map(|image| image.data_url.clone()));

    let on_remove = move |ev: web_sys::MouseEvent| {
        // アップロードエリア自体のクリック（ファイル選択）を起こさない
        ev.stop_propagation();
        set_state.update(|s| s.remove_file());
    };

    view! {
        <div class="selected-preview">
            {move || preview_url().map(|url| view! { <img src=url alt="選択画像" /> })}
            <p class="file-name">
                {move || state.with(|s| s.file_name().unwrap_or_default().to_string())}
            </p>
            <span class="file-status">{status_text}</span>
            <button class="btn btn-small btn-tertiary" on:click=on_remove>
                "取り消し"
            </button>
        </div>
    }
}

/// ファイルを非同期に読み込み、Data URLを導出して状態に反映する
///
/// 読み込み完了前にファイルが置き換えられていた場合、結果は破棄される。
/// 読み込み失敗は送信をブロックするエラー状態になる。
fn read_file(file: File, set_state: WriteSignal<WidgetState>) {
    let file_name = file.name();
    let mime_type = file.type_();

    let token = set_state
        .try_update(|s| s.add_file(file_name.clone()))
        .unwrap_or_default();

    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => {
            set_state.update(|s| {
                s.fail_encode(token);
            });
            return;
        }
    };

    let reader_for_load = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let buffer = match reader_for_load.result() {
            Ok(buffer) => buffer,
            Err(_) => {
                set_state.update(|s| {
                    s.fail_encode(token);
                });
                return;
            }
        };

        let bytes = Uint8Array::new(&buffer).to_vec();
        let data_url = encode_data_url(&bytes, &mime_type);
        let image = SelectedImage {
            file_name: file_name.clone(),
            mime_type: mime_type.clone(),
            bytes,
            data_url,
        };

        let accepted = set_state
            .try_update(|s| s.finish_encode(token, image))
            .unwrap_or(false);
        if !accepted {
            console::log!("置き換え済みファイルのエンコード結果を破棄");
        }
    }) as Box<dyn FnMut(_)>);

    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        set_state.update(|s| {
            s.fail_encode(token);
        });
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if reader.read_as_array_buffer(&file).is_err() {
        set_state.update(|s| {
            s.fail_encode(token);
        });
    }
}
