use std::process::ExitCode;

use clap::Parser;
use texlab_core::{
    Error, Result,
    config::{ConfigFile, Settings},
};

use crate::{
    abs::App,
    scenes::{Scene, SceneSwitch, viewer::Viewer},
};

mod abs;
mod cli;
mod logging;
mod render;
mod scenes;

/// Compiles and links `render/shaders/<name>/{vert,frag}.glsl`.
///
/// `$path_prefix` is the path from the calling file to `src`.
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {{
        $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )
        .and_then(|vert| {
            let frag = $crate::abs::Shader::new(
                &$gl,
                glow::FRAGMENT_SHADER,
                include_str!(concat!(
                    $path_prefix,
                    "/render/shaders/",
                    stringify!($name),
                    "/frag.glsl"
                )),
            )?;
            $crate::abs::ShaderProgram::new(&$gl, &[&vert, &frag])
        })
    }};
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    if let Err(e) = logging::init(cli.log_level()) {
        eprintln!("Failed to install logger: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let file = ConfigFile::discover(cli.config.as_deref())?;
    let settings = Settings::resolve(cli.exercise, file, cli.overrides())?;
    log::info!(
        "Starting exercise '{}' ({}x{}, {} texture path(s))",
        settings.exercise,
        settings.window_size.0,
        settings.window_size.1,
        settings.textures.len()
    );

    let (width, height) = settings.window_size;
    let mut app = App::new(settings.exercise.title(), width, height, settings.vsync)
        .map_err(Error::Platform)?;

    let mut scene: Box<dyn Scene> =
        Box::new(Viewer::new(&app.gl, &settings, app.drawable_size())?);

    'running: loop {
        for event in app.event_pump.poll_iter() {
            if let sdl2::event::Event::Window {
                win_event:
                    sdl2::event::WindowEvent::Resized(..) | sdl2::event::WindowEvent::SizeChanged(..),
                ..
            } = event
            {
                let (w, h) = app.window.drawable_size();
                scene.resize(&app.gl, w, h);
            }
            if let SceneSwitch::Quit = scene.handle_event(&event) {
                break 'running;
            }
        }

        scene.update();
        scene.render(&app.gl);
        app.window.gl_swap_window();
    }

    log::info!("Window closed, bye.");
    Ok(())
}
