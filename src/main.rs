/*
 * Box Sandbox
 *
 * A minimal interactive physics sandbox. Two white platforms sit in a
 * 640x480 window; holding the left mouse button drops a red box of random
 * size at the cursor every fourth frame. Boxes fall under gravity, bounce
 * and pile up. Press D for the debug overlay, close the window to quit.
 *
 * Set RUST_LOG=debug to log every spawn.
 */

use box_sandbox::{app, logging};

fn main() {
    logging::init();
    app::run();
}
