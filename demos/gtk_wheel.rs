#[cfg(feature = "gtk4-adapter")]
fn main() {
    use std::rc::Rc;

    use gtk4 as gtk;
    use gtk4::prelude::*;

    use lifewheel::api::{WheelEngine, WheelEngineConfig};
    use lifewheel::core::Viewport;
    use lifewheel::platform_gtk::GtkWheelAdapter;
    use lifewheel::render::CairoRenderer;

    const LOGICAL_SIZE: u32 = 800;

    fn rebuild_results(results_box: &gtk::Box, adapter: &GtkWheelAdapter) {
        while let Some(child) = results_box.first_child() {
            results_box.remove(&child);
        }

        let engine = adapter.engine();
        let summary = engine.borrow().summary();

        let radar_title = gtk::Label::new(Some("Your balance"));
        radar_title.add_css_class("title-2");
        results_box.append(&radar_title);
        results_box.append(adapter.radar_area());

        let grid = gtk::Grid::builder()
            .row_spacing(6)
            .column_spacing(18)
            .margin_top(12)
            .build();
        for (column, heading) in ["Area", "Level", "Comment"].iter().enumerate() {
            let label = gtk::Label::new(Some(heading));
            label.add_css_class("heading");
            grid.attach(&label, column as i32, 0, 1, 1);
        }
        for (row, entry) in summary.rows.iter().enumerate() {
            let row = row as i32 + 1;
            grid.attach(&gtk::Label::new(Some(entry.area.label())), 0, row, 1, 1);
            let level = gtk::Label::new(Some(format!("{}/10", entry.level.get()).as_str()));
            grid.attach(&level, 1, row, 1, 1);
            let comment = gtk::Label::new(Some(entry.comment.to_string().as_str()));
            grid.attach(&comment, 2, row, 1, 1);
        }
        results_box.append(&grid);

        let suggestions_title = gtk::Label::new(Some("Paths of growth"));
        suggestions_title.add_css_class("title-2");
        suggestions_title.set_margin_top(12);
        results_box.append(&suggestions_title);
        for suggestion in &summary.suggestions {
            let label = gtk::Label::new(Some(suggestion.as_str()));
            label.set_halign(gtk::Align::Start);
            label.set_wrap(true);
            results_box.append(&label);
        }
    }

    let _ = lifewheel::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.lifewheel.demo")
        .build();

    app.connect_activate(|app| {
        let renderer = match CairoRenderer::new(LOGICAL_SIZE as i32, LOGICAL_SIZE as i32) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to initialize cairo renderer: {err}");
                return;
            }
        };
        let config = WheelEngineConfig::new(Viewport::new(LOGICAL_SIZE, LOGICAL_SIZE));
        let engine = match WheelEngine::new(renderer, config) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to initialize wheel engine: {err}");
                return;
            }
        };

        let adapter = Rc::new(GtkWheelAdapter::new(engine));

        let root = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(12)
            .margin_top(16)
            .margin_bottom(16)
            .margin_start(16)
            .margin_end(16)
            .build();

        let title = gtk::Label::new(Some("Wheel of Life"));
        title.add_css_class("title-1");
        root.append(&title);
        let intro = gtk::Label::new(Some(
            "Click each segment to reflect your satisfaction level.",
        ));
        root.append(&intro);
        root.append(adapter.wheel_area());

        let buttons = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(12)
            .halign(gtk::Align::Center)
            .build();
        let evaluate = gtk::Button::with_label("Evaluate");
        let reset = gtk::Button::with_label("Start over");
        buttons.append(&evaluate);
        buttons.append(&reset);
        root.append(&buttons);

        let results_box = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(6)
            .visible(false)
            .build();
        root.append(&results_box);

        {
            let adapter = Rc::clone(&adapter);
            let results_box = results_box.clone();
            evaluate.connect_clicked(move |_| {
                let _ = adapter.update_engine(|engine| {
                    engine.show_results();
                    Ok(())
                });
                rebuild_results(&results_box, &adapter);
                results_box.set_visible(true);
            });
        }
        {
            let adapter = Rc::clone(&adapter);
            let results_box = results_box.clone();
            reset.connect_clicked(move |_| {
                let _ = adapter.update_engine(|engine| {
                    engine.reset();
                    Ok(())
                });
                results_box.set_visible(false);
            });
        }

        let scroller = gtk::ScrolledWindow::builder().child(&root).build();
        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("lifewheel | Wheel of Life")
            .default_width(880)
            .default_height(980)
            .build();
        window.set_child(Some(&scroller));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_wheel");
}
