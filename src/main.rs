use std::rc::Rc;

use hanoi_core::GameRules;

mod app_core;
mod app_router;
mod audio;
mod yew_app;

use app_core::AppCore;
use audio::SoundBoard;

fn main() {
    console_error_panic_hook::set_once();
    let rules = GameRules::default();
    let config = app_router::load_init_config(&rules);
    let core = AppCore::new(rules, &config);

    let sound = Rc::new(SoundBoard::new(config.muted));
    core.add_listener(sound.clone());
    sound.start_background();

    yew_app::run(core, Some(sound));
}
