mod all;
mod create_item;
mod dialogs;
mod footer;
mod header;
mod items;
mod log;
mod unit_picker;

use self::log::log;
use create_item::create_item;
use footer::footer;
use header::header;
use items::items;

pub use all::all as render;
