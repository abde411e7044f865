//! Fixed package metadata.

use super::{DependencyConstraint, EntryPoint};

pub const DISTRIBUTION_NAME: &str = "ainakan-tools";
/// Default importable package, also the default staging directory
pub const PACKAGE_NAME: &str = "ainakan_tools";
pub const DESCRIPTION: &str = "Ainakan CLI tools";
pub const LONG_DESCRIPTION: &str = "CLI tools for [Ainakan](https://ainakan.re).";
pub const LONG_DESCRIPTION_CONTENT_TYPE: &str = "text/markdown";
pub const AUTHOR: &str = "Ainakan Developers";
pub const AUTHOR_EMAIL: &str = "oleavr@ainakan.re";
pub const URL: &str = "https://ainakan.re";
pub const LICENSE: &str = "wxWindows Library Licence, Version 3.1";
pub const KEYWORDS: &str = "ainakan debugger dynamic instrumentation inject javascript windows macos linux ios iphone ipad android qnx";

pub const CLASSIFIERS: [&str; 19] = [
    "Development Status :: 5 - Production/Stable",
    "Environment :: Console",
    "Environment :: MacOS X",
    "Environment :: Win32 (MS Windows)",
    "Intended Audience :: Developers",
    "Intended Audience :: Science/Research",
    "License :: OSI Approved",
    "Natural Language :: English",
    "Operating System :: MacOS :: MacOS X",
    "Operating System :: Microsoft :: Windows",
    "Operating System :: POSIX :: Linux",
    "Programming Language :: Python :: 3",
    "Programming Language :: Python :: 3.7",
    "Programming Language :: Python :: 3.8",
    "Programming Language :: Python :: 3.9",
    "Programming Language :: Python :: 3.10",
    "Programming Language :: JavaScript",
    "Topic :: Software Development :: Debuggers",
    "Topic :: Software Development :: Libraries :: Python Modules",
];

/// (name, inclusive lower bound, exclusive upper bound)
const DEPENDENCIES: [(&str, (u64, u64, u64), (u64, u64, u64)); 5] = [
    ("colorama", (0, 2, 7), (1, 0, 0)),
    ("ainakan", (17, 5, 0), (18, 0, 0)),
    ("prompt-toolkit", (2, 0, 0), (4, 0, 0)),
    ("pygments", (2, 0, 2), (3, 0, 0)),
    ("websockets", (13, 0, 0), (14, 0, 0)),
];

/// (command, module under the package)
const COMMANDS: [(&str, &str); 16] = [
    ("ainakan", "repl"),
    ("ainakan-ls-devices", "lsd"),
    ("ainakan-ps", "ps"),
    ("ainakan-kill", "kill"),
    ("ainakan-ls", "ls"),
    ("ainakan-rm", "rm"),
    ("ainakan-pull", "pull"),
    ("ainakan-push", "push"),
    ("ainakan-discover", "discoverer"),
    ("ainakan-trace", "tracer"),
    ("ainakan-itrace", "itracer"),
    ("ainakan-join", "join"),
    ("ainakan-create", "creator"),
    ("ainakan-compile", "compiler"),
    ("ainakan-pm", "pm"),
    ("ainakan-apk", "apk"),
];

pub fn dependencies() -> Vec<DependencyConstraint> {
    DEPENDENCIES
        .iter()
        .map(|&(name, (a, b, c), (x, y, z))| DependencyConstraint {
            name: name.to_string(),
            lower: semver::Version::new(a, b, c),
            upper: semver::Version::new(x, y, z),
        })
        .collect()
}

/// Console entry points with modules under `package`.
pub fn entry_points(package: &str) -> [EntryPoint; 16] {
    COMMANDS.map(|(command, module)| EntryPoint {
        command: command.to_string(),
        module: format!("{}.{}", package, module),
        callable: "main".to_string(),
    })
}
