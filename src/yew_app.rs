use std::rc::Rc;

use web_sys::{DragEvent, HtmlInputElement, InputEvent};
use yew::prelude::*;

use hanoi_core::{PegIndex, PuzzleSnapshot};

use crate::app_core::{AppCore, AppSnapshot};
use crate::audio::SoundBoard;

const DISK_WIDTH_PX: u32 = 40;
const DISK_HUE_STEP: u32 = 30;
const DRAG_MIME: &str = "text/plain";

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<AppCore>,
    #[prop_or_default]
    pub(crate) sound: Option<Rc<SoundBoard>>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        let same_sound = match (&self.sound, &other.sound) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        Rc::ptr_eq(&self.core, &other.core) && same_sound
    }
}

#[derive(Properties, PartialEq)]
struct TowerProps {
    peg: PegIndex,
    disks: Vec<u32>,
    top_draggable: bool,
    droppable: bool,
    lifted: bool,
    on_pick_up: Callback<PegIndex>,
    on_drop: Callback<PegIndex>,
    on_drag_end: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct DiskProps {
    size: u32,
    draggable: bool,
    lifted: bool,
    on_pick_up: Callback<()>,
    on_drag_end: Callback<()>,
}

fn disk_style(size: u32) -> String {
    format!(
        "width: {}px; background-color: hsl({}, 70%, 50%);",
        size * DISK_WIDTH_PX,
        size * DISK_HUE_STEP
    )
}

#[function_component(DiskView)]
fn disk_view(props: &DiskProps) -> Html {
    let ondragstart = {
        let draggable = props.draggable;
        let size = props.size;
        let on_pick_up = props.on_pick_up.clone();
        Callback::from(move |event: DragEvent| {
            if !draggable {
                event.prevent_default();
                return;
            }
            if let Some(transfer) = event.data_transfer() {
                let _ = transfer.set_data(DRAG_MIME, &size.to_string());
            }
            on_pick_up.emit(());
        })
    };
    let ondragend = {
        let on_drag_end = props.on_drag_end.clone();
        Callback::from(move |_: DragEvent| on_drag_end.emit(()))
    };
    let class = classes!(
        "disk",
        props.draggable.then_some("disk--draggable"),
        props.lifted.then_some("disk--lifted"),
    );
    html! {
        <div
            {class}
            style={disk_style(props.size)}
            draggable={if props.draggable { "true" } else { "false" }}
            {ondragstart}
            {ondragend}
        />
    }
}

#[function_component(Tower)]
fn tower(props: &TowerProps) -> Html {
    let hovered = use_state(|| false);
    let peg = props.peg;

    let ondragover = {
        let hovered = hovered.clone();
        let droppable = props.droppable;
        Callback::from(move |event: DragEvent| {
            if droppable {
                event.prevent_default();
                if !*hovered {
                    hovered.set(true);
                }
            }
        })
    };
    let ondragleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: DragEvent| hovered.set(false))
    };
    let ondrop = {
        let hovered = hovered.clone();
        let on_drop = props.on_drop.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            hovered.set(false);
            on_drop.emit(peg);
        })
    };

    let top = props.disks.len().checked_sub(1);
    let disks = props.disks.iter().enumerate().map(|(level, &size)| {
        let is_top = Some(level) == top;
        let on_pick_up = {
            let on_pick_up = props.on_pick_up.clone();
            Callback::from(move |()| on_pick_up.emit(peg))
        };
        html! {
            <DiskView
                key={size}
                {size}
                draggable={is_top && props.top_draggable}
                lifted={is_top && props.lifted}
                {on_pick_up}
                on_drag_end={props.on_drag_end.clone()}
            />
        }
    });

    let class = classes!(
        "tower",
        (*hovered && props.droppable).then_some("tower--over"),
        props.droppable.then_some("tower--droppable"),
    );
    html! {
        <div {class} data-peg={peg.label().to_string()} {ondragover} {ondragleave} {ondrop}>
            <div class="tower__base" />
            { for disks }
        </div>
    }
}

fn status_line(puzzle: &PuzzleSnapshot) -> Html {
    if !puzzle.solved {
        return html! {};
    }
    html! {
        <p class="status status--won">{ "Congratulations! You solved the puzzle!" }</p>
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let app_core = props.core.clone();
    let app_snapshot = use_state(|| app_core.snapshot());
    {
        let app_core = app_core.clone();
        let app_snapshot = app_snapshot.clone();
        use_effect_with((), move |_| {
            let app_core_for_cb = app_core.clone();
            let subscription = app_core.subscribe(Rc::new(move || {
                app_snapshot.set(app_core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }
    let snapshot: &AppSnapshot = &app_snapshot;
    {
        let sound = props.sound.clone();
        use_effect_with(snapshot.muted, move |muted| {
            if let Some(sound) = sound {
                sound.set_muted(*muted);
            }
        });
    }

    let on_pick_up = {
        let app_core = app_core.clone();
        Callback::from(move |peg: PegIndex| {
            app_core.pick_up(peg);
        })
    };
    let on_drop = {
        let app_core = app_core.clone();
        Callback::from(move |peg: PegIndex| {
            if !app_core.can_drop(peg) {
                app_core.cancel_drag();
                return;
            }
            if let Some(reason) = app_core.drop_on(peg).rejection() {
                gloo::console::debug!("drop rejected", reason.to_string());
            }
        })
    };
    let on_drag_end = {
        let app_core = app_core.clone();
        Callback::from(move |()| app_core.cancel_drag())
    };
    let on_disk_count = {
        let app_core = app_core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                app_core.set_disk_count(value);
            }
        })
    };
    let on_toggle_mute = {
        let app_core = app_core.clone();
        Callback::from(move |_: MouseEvent| {
            app_core.toggle_mute();
        })
    };
    let on_play_again = {
        let app_core = app_core.clone();
        Callback::from(move |_: MouseEvent| app_core.reset())
    };

    let towers = PegIndex::ALL.into_iter().map(|peg| {
        html! {
            <Tower
                key={peg.index()}
                {peg}
                disks={snapshot.puzzle.pegs[peg.index()].clone()}
                top_draggable={snapshot.top_draggable(peg)}
                droppable={snapshot.droppable[peg.index()]}
                lifted={snapshot.held.is_some_and(|grip| grip.peg == peg)}
                on_pick_up={on_pick_up.clone()}
                on_drop={on_drop.clone()}
                on_drag_end={on_drag_end.clone()}
            />
        }
    });

    let (mute_icon, mute_label) = if snapshot.muted {
        ("\u{1F507}", "Unmute")
    } else {
        ("\u{1F50A}", "Mute")
    };
    let play_again = if snapshot.puzzle.solved {
        html! { <button class="play-again" onclick={on_play_again}>{ "Play Again" }</button> }
    } else {
        html! {}
    };

    html! {
        <main class="hanoi">
            <header class="hanoi__header">
                <h1>{ "Tower of Hanoi" }</h1>
                <button class="mute" aria-label={mute_label} onclick={on_toggle_mute}>
                    { mute_icon }
                </button>
            </header>
            <section class="disk-count">
                <label for="disk-slider">
                    { "Number of Disks: " }
                    <span class="disk-count__value">{ snapshot.puzzle.disk_count }</span>
                </label>
                <input
                    id="disk-slider"
                    type="range"
                    min={snapshot.min_disks.to_string()}
                    max={snapshot.max_disks.to_string()}
                    value={snapshot.puzzle.disk_count.to_string()}
                    oninput={on_disk_count}
                />
            </section>
            <section class="towers">
                { for towers }
            </section>
            <footer class="hanoi__footer">
                <p class="moves">
                    { "Moves: " }
                    <span class="moves__count">{ snapshot.puzzle.move_count }</span>
                    <span class="moves__par">{ format!(" (best {})", snapshot.par) }</span>
                </p>
                { status_line(&snapshot.puzzle) }
                { play_again }
            </footer>
        </main>
    }
}

pub(crate) fn run(core: Rc<AppCore>, sound: Option<Rc<SoundBoard>>) {
    yew::Renderer::<App>::with_props(AppProps { core, sound }).render();
}
