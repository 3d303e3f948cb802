//! Line-based console front end: prompts, the game loop, and the menu shell.
//! Everything is generic over `BufRead`/`Write` so it runs against stdin and
//! stdout in the binary and against in-memory buffers in tests.

mod app;
mod game_loop;
mod prompt;

pub use app::App;
pub use game_loop::play_game;
pub use prompt::{read_human_move, read_menu_choice, read_name, MenuChoice};
