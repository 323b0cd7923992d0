use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");
    let embedded_dir = out_dir.join("dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .unwrap();
    } else if !embedded_dir.exists() {
        // include_dir! needs the directory to exist even before the frontend
        // has been built once; embed a stub page until `trunk build` runs.
        fs::create_dir_all(&embedded_dir).unwrap();
        fs::write(
            embedded_dir.join("index.html"),
            "<!DOCTYPE html><html lang=\"pt-BR\"><body>\
             <p>Frontend ainda não compilado. Execute <code>trunk build</code> em frontend/.</p>\
             </body></html>",
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
