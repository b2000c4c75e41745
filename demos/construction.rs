//! Regenerates the construction function files: glass shells for domes and
//! spheres, plus arc tunnels along x and z. Shells are built by filling the
//! outer solid with glass and refilling the inner solid with air.

use std::env;
use std::fs;
use std::path::PathBuf;

use fillgen::prelude::*;

const FILL_MAX_VOLUME: i64 = 32768;

fn shell_commands(
    outer: &Solid,
    inner: &Solid,
    block: &str,
) -> Result<Vec<String>, Error> {
    let mut commands = fill_commands(&outer.generate_regions(FILL_MAX_VOLUME)?, block);
    commands.extend(fill_commands(
        &inner.generate_regions(FILL_MAX_VOLUME)?,
        "air",
    ));
    Ok(commands)
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let out_dir = PathBuf::from(
        env::args()
            .nth(1)
            .unwrap_or_else(|| String::from("packbase/functions")),
    );
    fs::create_dir_all(&out_dir)?;

    type Build = fn(i32) -> Result<Solid, Error>;
    let shells: [(Build, &str); 2] = [
        (Solid::hemisphere, "dome"),
        (Solid::sphere, "sphere-shell"),
    ];
    for (build, label) in shells {
        for diameter in [17, 33, 65] {
            let commands = shell_commands(&build(diameter)?, &build(diameter - 2)?, "glass")?;
            let name = format!("{}-d{}-glass.mcfunction", label, diameter);
            println!("{}: {}", name, commands.len());
            write_function(out_dir.join(name), &commands)?;
        }
    }

    for axis in [Axis::Z, Axis::X] {
        for (diameter, length) in [(9, 17), (11, 17), (9, 33), (11, 33)] {
            let outer = Solid::arc_tunnel(diameter, length, axis)?;
            let inner = Solid::arc_tunnel(diameter - 2, length, axis)?;
            let commands = shell_commands(&outer, &inner, "glass")?;
            let name = format!("arctunnel-{}-d{}-l{}-glass.mcfunction", axis, diameter, length);
            println!("{}: {}", name, commands.len());
            write_function(out_dir.join(name), &commands)?;
        }
    }

    Ok(())
}
