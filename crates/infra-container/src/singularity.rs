// Singularity command line for a container invocation

use hhn_core::port::ContainerInvocation;

/// Arguments after the `singularity` binary. The image is pulled from the
/// docker registry; the environment is cleaned and the host filesystem
/// hidden except for the bind mounts.
pub fn singularity_args(invocation: &ContainerInvocation) -> Vec<String> {
    let mut args = vec![
        "exec".to_string(),
        "--cleanenv".to_string(),
        "--containall".to_string(),
        "--pwd".to_string(),
        invocation.working_dir.clone(),
    ];

    if !invocation.volumes.is_empty() {
        let binds: Vec<String> = invocation.volumes.iter().map(|v| v.bind_spec()).collect();
        args.push("--bind".to_string());
        args.push(binds.join(","));
    }

    args.push(format!("docker://{}", invocation.image));
    args.extend(invocation.command.iter().cloned());
    args
}
