#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/rpayroll.ico is optional; only the version strings are required
    let mut res = WindowsResource::new();
    res.set("FileDescription", "rPayroll CLI")
        .set("ProductName", "rPayroll")
        .set("OriginalFilename", "rpayroll.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"));
    if std::path::Path::new("res/rpayroll.ico").exists() {
        res.set_icon("res/rpayroll.ico");
    }
    if let Err(e) = res.compile() {
        println!("cargo:warning=Failed to embed version resource: {e}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
