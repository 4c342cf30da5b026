//! Walk through the three alert variants on a headless host

use std::rc::Rc;

use fos_alert::headless::{HeadlessHost, SimulatedPermission};
use fos_alert::{
    AlertConfig, AlertVariant, Dialog, Permission, PermissionAlert, PermissionStatus,
    PermissionType, Presenter, UiScheduler,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("fOS alert demo {}", fos_alert::VERSION);

    // Optional JSON config as first argument
    let config = match std::env::args().nth(1) {
        Some(path) => AlertConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => AlertConfig::new("Widr"),
    };

    let host = Rc::new(HeadlessHost::new());
    let presenter = Presenter::new(UiScheduler::new());

    let contacts = Rc::new(SimulatedPermission::new(
        PermissionType::Contacts,
        PermissionStatus::Disabled,
    ));
    let notifications = Rc::new(SimulatedPermission::new(
        PermissionType::Notifications,
        PermissionStatus::Denied,
    ));
    let camera = Rc::new(SimulatedPermission::new(
        PermissionType::Camera,
        PermissionStatus::NotDetermined,
    ));

    for permission in [&contacts, &notifications, &camera] {
        let Some(variant) = AlertVariant::for_status(permission.status()) else {
            continue;
        };
        PermissionAlert::new(variant, permission.clone(), host.clone(), &config)
            .present(&presenter);
    }

    println!("Scheduled {} alerts, {} shown so far", presenter.presented(), host.pending_dialogs());
    presenter.scheduler().run_until_idle();

    // Disabled contacts: the only way out is OK
    if let Some(dialog) = host.take_dialog() {
        print_dialog(&dialog);
        dialog.cancel()?;
    }

    // Denied notifications: go to Settings, flip the switch, come back
    if let Some(dialog) = host.take_dialog() {
        print_dialog(&dialog);
        dialog.confirm()?;
        println!("Opened {:?}, {} observer(s) waiting", host.opened_urls(), host.observer_count());
        notifications.set_status(PermissionStatus::Authorized);
        host.become_active();
    }

    // Pre-permission camera: confirm, then answer the OS prompt
    if let Some(dialog) = host.take_dialog() {
        print_dialog(&dialog);
        dialog.confirm()?;
        camera.resolve_prompt(PermissionStatus::Authorized);
    }

    println!();
    println!("contacts      -> {:?}", contacts.callback_statuses());
    println!("notifications -> {:?}", notifications.callback_statuses());
    println!("camera        -> {:?}", camera.callback_statuses());

    Ok(())
}

fn print_dialog(dialog: &Dialog) {
    println!();
    println!("┌ {}", dialog.title.as_deref().unwrap_or(""));
    if let Some(message) = &dialog.message {
        println!("│ {}", message);
    }
    println!("└ {:?}", dialog.labels());
}
