// Docker command line for a container invocation

use hhn_core::port::ContainerInvocation;

/// Arguments after the `docker` binary:
/// `run --rm -w <wd> -v <src>:<dest>... <image> <command...>`
pub fn docker_args(invocation: &ContainerInvocation) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "--rm".to_string(),
        "-w".to_string(),
        invocation.working_dir.clone(),
    ];

    for volume in &invocation.volumes {
        args.push("-v".to_string());
        args.push(volume.bind_spec());
    }

    args.push(invocation.image.clone());
    args.extend(invocation.command.iter().cloned());
    args
}
