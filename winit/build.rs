fn main() {
    // Compile the Slint file.
    //
    // The feedwindow.slint file is compiled into a Rust file that contains the UI code.
    slint_build::compile("ui/feedwindow.slint").expect("Slint build failed");
}
