//! Shortcut Recorder: record a global keyboard shortcut in a desktop window.

mod app_event;
mod config;
mod error;
mod hotkey_handler;
mod input_translation;
mod persistence_gate;
mod recorder_window;
mod shortcut_policy;
mod terminal_bell;
#[cfg(test)]
mod tests;

pub(crate) use {
    app_event::AppEvent,
    error::{AppError, Result as AppResult},
    hotkey_handler::{HotkeyHandler, HotkeyRegistrar},
    persistence_gate::ConfigGate,
    recorder_window::{CONTROL_FRAME, RecorderWindow, WindowOutcome},
    shortcut_policy::GlobalShortcutPolicy,
    terminal_bell::TerminalBell,
};

use crate::config::{Config, default_log_filter};

use std::sync::Arc;

use shortcut_recorder_core::{
    RecorderController, UiReceiver, collab::AlertSink, monitor::EventTap, pause::PauseFlag,
    ui_channel,
};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use tokio::sync::{Mutex, mpsc, watch};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let loaded = Config::config_path()
        .and_then(|path| Config::load_from(&path).map(|config| (config, path)));

    let filter = match &loaded {
        Ok((config, _)) => config.logging.filter.clone(),
        Err(_) => default_log_filter(),
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let (config, config_path) = match loaded {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let initial = match config.shortcut() {
        Ok(shortcut) => shortcut,
        Err(e) => {
            warn!(error = ?e, "Configured shortcut is invalid, starting unbound");
            None
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    // GlobalHotKeyManager lives on the main thread: tao's event loop pumps
    // the Windows messages needed for WM_HOTKEY delivery.
    let (mut registrar, bound_rx) = match HotkeyRegistrar::new() {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to create hotkey manager: {:?}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = registrar.rebind(initial) {
        warn!(error = ?e, "Initial shortcut could not be registered");
    }

    let tap = EventTap::shared();
    let pause = PauseFlag::global();
    let (ui_tx, ui_rx) = ui_channel();
    let (app_tx, app_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let labels = config.labels.clone();
    let config = Arc::new(Mutex::new(config));

    let recorder = RecorderController::builder(ui_tx, rt.handle().clone())
        .initial(initial)
        .on_change(ConfigGate::new(config, config_path))
        .validator(GlobalShortcutPolicy)
        .localizer(labels)
        .alert(TerminalBell)
        .event_tap(tap.clone())
        .pause_flag(pause.clone())
        .frame(CONTROL_FRAME)
        .build();

    rt.spawn(forward_to_event_loop(ui_rx, app_rx, proxy));

    let hotkey_handler = HotkeyHandler::new(bound_rx, pause, app_tx);
    rt.spawn(async move {
        if let Err(e) = hotkey_handler.run(shutdown_rx).await {
            error!(error = ?e, "Hotkey handler error");
        }
    });

    let mut pending_recorder = Some(recorder);
    let mut host: Option<RecorderWindow> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let Some(recorder) = pending_recorder.take() else {
                    return;
                };

                match RecorderWindow::new(target, recorder, tap.clone()) {
                    Ok(window) => host = Some(window),
                    Err(e) => {
                        error!("Failed to open recorder window: {:?}", e);
                        *control_flow = ControlFlow::ExitWithCode(1);
                        return;
                    }
                }

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                info!(bound = ?registrar.bound_id(), "Shortcut recorder ready");
            }
            Event::WindowEvent {
                window_id, event, ..
            } => {
                let Some(window) = host.as_mut() else {
                    return;
                };
                if window.window_id() != window_id {
                    return;
                }

                if window.handle_window_event(&event) == WindowOutcome::Close {
                    if shutdown_tx.send(true).is_err() {
                        debug!("Hotkey handler already stopped");
                    }
                    host = None;
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            }
            Event::UserEvent(AppEvent::Ui(task)) => {
                let Some(window) = host.as_mut() else {
                    return;
                };
                let Some(change) = window.handle_ui_task(task) else {
                    return;
                };

                if let Err(e) = registrar.rebind(change.current) {
                    error!(error = ?e, "Failed to rebind global hotkey");
                    TerminalBell.beep();
                }
            }
            Event::UserEvent(AppEvent::HotkeyPressed { press_id }) => {
                if let Some(window) = host.as_mut() {
                    window.record_hotkey_press(press_id);
                }
            }
            _ => {}
        }

        // Keep the runtime alive in the closure for the app's lifetime.
        let _ = &rt;
    });
}

/// Move recorder UI tasks and background events onto the tao event loop.
async fn forward_to_event_loop(
    mut ui_rx: UiReceiver,
    mut app_rx: mpsc::UnboundedReceiver<AppEvent>,
    proxy: EventLoopProxy<AppEvent>,
) {
    loop {
        let event = tokio::select! {
            Some(task) = ui_rx.recv() => AppEvent::Ui(task),
            Some(event) = app_rx.recv() => event,
            else => break,
        };

        if proxy.send_event(event).is_err() {
            debug!("Event loop closed, stopping forwarder");
            break;
        }
    }
}
