use anyhow::Result;
use log::{error, info};
use macroquad::prelude::*;

use canvas_snake::app::GameController;
use canvas_snake::config::{CONFIG_PATH, GameConfig};
use canvas_snake::input::{InputEvent, InputHandler};
use canvas_snake::render::{HUD_HEIGHT, MacroquadSurface, Overlay, Renderer};

// Window matches the 20x20 board at 20px plus the score strip
const WINDOW_WIDTH: i32 = 400;
const WINDOW_HEIGHT: i32 = 400 + HUD_HEIGHT as i32;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() -> Result<()> {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

    TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

// No terminal in the browser; the log facade stays silent
#[cfg(target_arch = "wasm32")]
fn init_logging() -> Result<()> {
    Ok(())
}

fn now_ms() -> f64 {
    get_time() * 1000.0
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err}");
    }

    let config = GameConfig::load_or_default(CONFIG_PATH);
    info!("starting snake, speed {}ms -> {}ms", config.base_interval_ms, config.min_interval_ms);

    let seed = (macroquad::miniquad::date::now() * 1_000_000.0) as u64;
    let renderer = Renderer::new(config.cell_size);
    let input = InputHandler::new();
    let mut controller = match GameController::new(config, seed) {
        Ok(controller) => controller,
        Err(err) => {
            error!("{err:#}");
            return;
        }
    };

    loop {
        let (board_w, board_h) = controller.config().board_size();
        // Centre the board when the window is larger than the canvas
        let off_x = ((screen_width() - board_w) * 0.5).max(0.0);
        let off_y = ((screen_height() - board_h - HUD_HEIGHT) * 0.5).max(0.0);
        let mut hud_surface = MacroquadSurface::at(off_x, off_y);
        let mut board_surface = MacroquadSurface::at(off_x, off_y + HUD_HEIGHT);

        let now = now_ms();
        let mut quit = false;
        for event in input.poll() {
            match event {
                InputEvent::Quit => quit = true,
                other => controller.handle(other, now),
            }
        }
        if quit {
            break;
        }

        if controller.overlay().is_some() && is_mouse_button_pressed(MouseButton::Left) {
            let point = board_surface.to_local(mouse_position());
            if Overlay::button_hit(board_w, board_h, point) {
                controller.handle(InputEvent::Start, now);
            }
        }

        controller.update(now);

        clear_background(BLACK);
        controller.draw(&renderer, &mut hud_surface, &mut board_surface);

        next_frame().await;
    }
}
