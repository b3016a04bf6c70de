use std::path::PathBuf;

use super::*;

fn command_for(id: &str) -> String {
    PlatformProfile::for_host(&HostOs::from_identifier(id))
        .unwrap()
        .compile_command("./src/*.cpp")
}

#[test]
fn host_identifiers_parse_both_naming_schemes() {
    assert_eq!(HostOs::from_identifier("Linux"), HostOs::Linux);
    assert_eq!(HostOs::from_identifier("linux"), HostOs::Linux);
    assert_eq!(HostOs::from_identifier("Darwin"), HostOs::MacOs);
    assert_eq!(HostOs::from_identifier("macos"), HostOs::MacOs);
    assert_eq!(HostOs::from_identifier("Windows"), HostOs::Windows);
    assert_eq!(
        HostOs::from_identifier("FreeBSD"),
        HostOs::Unsupported("FreeBSD".to_string())
    );
}

#[test]
fn linux_command_defines_linux_and_links_sdl2() {
    let cmd = command_for("Linux");
    assert!(cmd.contains("-D LINUX"));
    assert!(cmd.contains("-lSDL2"));
    assert_eq!(
        cmd,
        "g++ -std=c++17 -D LINUX -o project  -I ./include/ -I ./../common/thirdparty/glm/ ./src/*.cpp -lSDL2 -ldl"
    );
}

#[test]
fn darwin_command_defines_mac_and_uses_framework() {
    let cmd = command_for("Darwin");
    assert!(cmd.contains("-D MAC"));
    assert!(cmd.contains("-framework SDL2"));
}

#[test]
fn windows_profile_builds_exe_and_runs_bare() {
    let p = PlatformProfile::for_host(&HostOs::Windows).unwrap();
    assert_eq!(p.executable, "project.exe");
    assert!(p.compile_command("./src/*.cpp").contains("-o project.exe"));
    assert_eq!(p.run_command(4), "project.exe 4");
}

#[test]
fn unix_profiles_run_relative() {
    let p = PlatformProfile::for_host(&HostOs::Linux).unwrap();
    assert_eq!(p.run_command(3), "./project 3");
}

#[test]
fn unsupported_host_fails_fast() {
    let err = PlatformProfile::for_host(&HostOs::Unsupported("Haiku".into())).unwrap_err();
    assert!(matches!(err, BakeError::Platform(_)));
    assert!(err.to_string().contains("Haiku"));
}

#[test]
fn empty_segments_keep_their_separators() {
    let p = PlatformProfile {
        compiler: "c++".into(),
        defines: String::new(),
        include_paths: String::new(),
        libraries: String::new(),
        executable: "a".into(),
        launcher: Launcher::Relative,
    };
    assert_eq!(p.compile_command("x.cpp"), "c++  -o a   x.cpp ");
}

#[test]
fn json_profile_loads_with_default_launcher() {
    let dir = PathBuf::from("target").join("unit_profile");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("profile.json");
    std::fs::write(
        &path,
        r#"{"compiler":"clang++ -std=c++17","defines":"-D LINUX","include_paths":"-I ./include/","libraries":"-lSDL2","executable":"project"}"#,
    )
    .unwrap();

    let p = PlatformProfile::from_path(&path).unwrap();
    assert_eq!(p.compiler, "clang++ -std=c++17");
    assert_eq!(p.launcher, Launcher::Relative);
}

#[test]
fn json_profile_errors_are_reported() {
    let dir = PathBuf::from("target").join("unit_profile");
    std::fs::create_dir_all(&dir).unwrap();

    let missing = dir.join("does_not_exist.json");
    let err = PlatformProfile::from_path(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.json"));

    let blank = dir.join("blank_compiler.json");
    std::fs::write(
        &blank,
        r#"{"compiler":" ","defines":"","include_paths":"","libraries":"","executable":"p","launcher":"bare"}"#,
    )
    .unwrap();
    assert!(matches!(
        PlatformProfile::from_path(&blank).unwrap_err(),
        BakeError::Validation(_)
    ));
}
