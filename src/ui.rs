use crate::browser::Browser;
use crate::config::Config;
use crate::history::SearchHistory;
use crate::icons;
use crate::platform::Platform;
use crate::resolver;
use gtk::prelude::*;
use gtk::gdk;
use gtk::{
    Application, Box as GtkBox, Button, Entry, Grid, Label, ListBox, ListBoxRow, ScrolledWindow,
    Window,
};
use std::sync::{Arc, Mutex};

pub fn build_ui(app: &Application, config: Config) {
    let history = Arc::new(Mutex::new(SearchHistory::new()));
    let icon_dir = config.icons.directory();

    let window = Window::builder()
        .application(app)
        .title("Your Web Assistant")
        .default_width(config.window.width)
        .default_height(config.window.height)
        .resizable(false)
        .build();

    let main_box = GtkBox::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(0)
        .build();
    main_box.add_css_class("assistant-box");

    // Header bar with the app title
    let header = Label::new(Some("🔎 Your Assistant"));
    header.add_css_class("header-bar");
    main_box.append(&header);

    // Query entry with its caption
    let entry_box = GtkBox::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(8)
        .margin_start(14)
        .margin_end(14)
        .margin_top(12)
        .margin_bottom(6)
        .build();

    let entry_label = Label::new(Some("Enter your search term:"));
    entry_label.set_halign(gtk::Align::Start);
    entry_label.add_css_class("section-title");

    let entry = Entry::builder()
        .placeholder_text("Type a query, or leave empty for the home page")
        .build();

    entry_box.append(&entry_label);
    entry_box.append(&entry);
    main_box.append(&entry_box);

    // Platform buttons, 2 columns
    let grid = Grid::new();
    grid.set_row_spacing(6);
    grid.set_column_spacing(6);
    grid.set_margin_start(14);
    grid.set_margin_end(14);
    grid.set_margin_top(6);
    grid.set_margin_bottom(6);
    grid.set_column_homogeneous(true);

    // History panel
    let hist_label = Label::new(Some("Search History"));
    hist_label.set_halign(gtk::Align::Start);
    hist_label.set_margin_start(14);
    hist_label.set_margin_top(10);
    hist_label.add_css_class("section-title");

    let list_box = ListBox::new();
    list_box.set_selection_mode(gtk::SelectionMode::None);
    list_box.add_css_class("history-list");

    let scrolled = ScrolledWindow::builder()
        .child(&list_box)
        .hscrollbar_policy(gtk::PolicyType::Never)
        .vexpand(true)
        .margin_start(14)
        .margin_end(14)
        .margin_top(6)
        .margin_bottom(6)
        .build();

    // Wire up the six platform buttons
    let cols = 2;
    for (idx, platform) in Platform::ALL.into_iter().enumerate() {
        let icon = icons::platform_icon(&icon_dir, platform, config.icons.size);

        let content = GtkBox::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(8)
            .build();
        content.append(&icon);
        content.append(&Label::new(Some(platform.label())));

        let button = Button::new();
        button.set_child(Some(&content));
        button.set_hexpand(true);
        button.add_css_class("platform");
        button.add_css_class(platform.css_class());

        let entry_clone = entry.clone();
        let history_clone = history.clone();
        let list_box_clone = list_box.clone();
        let window_clone = window.clone();
        button.connect_clicked(move |_| {
            run_search(
                platform,
                &entry_clone,
                &history_clone,
                &list_box_clone,
                &window_clone,
            );
        });

        let r = (idx / cols) as i32;
        let c = (idx % cols) as i32;
        grid.attach(&button, c, r, 1, 1);
    }
    main_box.append(&grid);
    main_box.append(&hist_label);
    main_box.append(&scrolled);

    // Enter key defaults to a Google search
    let history_clone = history.clone();
    let list_box_clone = list_box.clone();
    let window_clone = window.clone();
    entry.connect_activate(move |entry| {
        run_search(
            Platform::Google,
            entry,
            &history_clone,
            &list_box_clone,
            &window_clone,
        );
    });

    // Footer: clear history on the left, exit on the right
    let footer = GtkBox::builder()
        .orientation(gtk::Orientation::Horizontal)
        .margin_start(14)
        .margin_end(14)
        .margin_top(4)
        .margin_bottom(10)
        .build();

    let clear_button = Button::with_label("Clear History");
    clear_button.add_css_class("clear-button");
    let history_clone = history.clone();
    let list_box_clone = list_box.clone();
    clear_button.connect_clicked(move |_| {
        history_clone.lock().unwrap().clear();
        while let Some(row) = list_box_clone.row_at_index(0) {
            list_box_clone.remove(&row);
        }
    });

    let exit_button = Button::with_label("Exit");
    exit_button.add_css_class("exit-button");
    exit_button.set_hexpand(true);
    exit_button.set_halign(gtk::Align::End);
    let window_clone = window.clone();
    exit_button.connect_clicked(move |_| {
        window_clone.close();
    });

    footer.append(&clear_button);
    footer.append(&exit_button);
    main_box.append(&footer);

    apply_theme(&config);

    window.set_child(Some(&main_box));
    window.present();
    entry.grab_focus();
}

/// Resolve the entry text for a platform, launch the URL and record it.
/// An empty query raises a warning dialog and leaves history untouched.
fn run_search(
    platform: Platform,
    entry: &Entry,
    history: &Arc<Mutex<SearchHistory>>,
    list_box: &ListBox,
    window: &Window,
) {
    let text = entry.text();
    let query = text.trim();
    if query.is_empty() {
        show_warning(window, "Input Error", "Please enter a search term.");
        return;
    }

    let url = resolver::build_url(platform, query);
    if let Err(e) = Browser::open(&url) {
        eprintln!("Error opening browser: {}", e);
    }

    let mut history = history.lock().unwrap();
    let entry_text = history.record(platform, query);
    list_box.prepend(&history_row(entry_text));
}

fn history_row(text: &str) -> ListBoxRow {
    let label = Label::new(Some(text));
    label.set_xalign(0.0);
    label.set_margin_start(8);
    label.set_margin_end(8);
    label.set_margin_top(4);
    label.set_margin_bottom(4);
    label.add_css_class("history-entry");

    let row = ListBoxRow::new();
    row.set_child(Some(&label));
    row
}

fn show_warning(window: &Window, message: &str, detail: &str) {
    let dialog = gtk::AlertDialog::builder()
        .message(message)
        .detail(detail)
        .modal(true)
        .build();
    dialog.show(Some(window));
}

/// Install the themed stylesheet. Hover states are plain CSS `:hover`
/// rules, so no per-widget color bookkeeping is needed.
fn apply_theme(config: &Config) {
    let mut css = format!(
        r#"
        window {{
            background-color: {};
        }}

        .header-bar {{
            background-color: {};
            color: white;
            font-size: 18pt;
            font-weight: bold;
            padding: 14px;
        }}

        .section-title {{
            color: {};
            font-size: {}pt;
            font-weight: bold;
        }}

        entry {{
            font-size: {}pt;
        }}

        .history-list {{
            background-color: {};
        }}

        .history-list row {{
            background-color: transparent;
        }}

        .history-entry {{
            color: {};
            font-size: 10pt;
        }}

        button.platform {{
            color: white;
            font-size: 11pt;
            font-weight: bold;
            padding: 8px;
            border: none;
            border-radius: 0px;
        }}

        .icon-placeholder {{
            background-color: rgba(130, 180, 200, 1.0);
            color: white;
            font-weight: bold;
            border-radius: 4px;
        }}

        .clear-button {{
            background-color: #ffb703;
            color: black;
            padding: 6px 10px;
        }}

        .exit-button {{
            background-color: #ef233c;
            color: white;
            padding: 6px 10px;
        }}
        "#,
        config.theme.background_color, // window background
        config.theme.header_color,     // header-bar background
        config.theme.title_color,      // section-title color
        config.theme.font_size,        // section-title font-size
        config.theme.font_size,        // entry font-size
        config.theme.history_color,    // history-list background
        config.theme.title_color,      // history-entry color
    );

    for platform in Platform::ALL {
        css.push_str(&format!(
            "button.platform.{} {{ background-color: {}; }}\n",
            platform.css_class(),
            platform.accent_color()
        ));
    }
    // Last so it wins over the per-platform backgrounds above
    css.push_str(&format!(
        "button.platform:hover {{ background-color: {}; }}\n",
        config.theme.button_hover_color
    ));

    let provider = gtk::CssProvider::new();
    provider.load_from_data(&css);
    gtk::style_context_add_provider_for_display(
        &gdk::Display::default().unwrap(),
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
