use folio_browser::zoon::*;

mod about;
mod app;
mod contact;
mod cursor;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;
mod tech_stack;
mod theme;
mod widgets;

fn main() {
    start_app("app", app::App::new);
}
