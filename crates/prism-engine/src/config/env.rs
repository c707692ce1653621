/// Selects the wgpu backend set (`all`, `primary`, `vulkan`, `metal`, `dx12`, `gl`).
pub const BACKEND_VAR: &str = "PRISM_BACKEND";

/// Selects the surface present mode (`fifo`, `mailbox`, `immediate`, ...).
pub const PRESENT_MODE_VAR: &str = "PRISM_PRESENT_MODE";

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace('_', "-")
}

/// Parses a backend selector. Returns `None` for unrecognised input.
pub fn parse_backends(value: &str) -> Option<wgpu::Backends> {
    let backends = match normalize(value).as_str() {
        "all" => wgpu::Backends::all(),
        "primary" => wgpu::Backends::PRIMARY,
        "vulkan" | "vk" => wgpu::Backends::VULKAN,
        "metal" | "mtl" => wgpu::Backends::METAL,
        "dx12" | "d3d12" => wgpu::Backends::DX12,
        "gl" | "gles" | "opengl" => wgpu::Backends::GL,
        _ => return None,
    };
    Some(backends)
}

/// Parses a present mode name. Returns `None` for unrecognised input.
pub fn parse_present_mode(value: &str) -> Option<wgpu::PresentMode> {
    let mode = match normalize(value).as_str() {
        "fifo" | "vsync" => wgpu::PresentMode::Fifo,
        "fifo-relaxed" => wgpu::PresentMode::FifoRelaxed,
        "mailbox" => wgpu::PresentMode::Mailbox,
        "immediate" => wgpu::PresentMode::Immediate,
        "auto-vsync" => wgpu::PresentMode::AutoVsync,
        "auto-no-vsync" => wgpu::PresentMode::AutoNoVsync,
        _ => return None,
    };
    Some(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backends_are_case_and_space_insensitive() {
        assert_eq!(parse_backends(" Metal "), Some(wgpu::Backends::METAL));
        assert_eq!(parse_backends("VULKAN"), Some(wgpu::Backends::VULKAN));
        assert_eq!(parse_backends("d3d12"), Some(wgpu::Backends::DX12));
        assert_eq!(parse_backends("all"), Some(wgpu::Backends::all()));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert_eq!(parse_backends("glide"), None);
        assert_eq!(parse_backends(""), None);
    }

    #[test]
    fn present_modes_accept_underscores() {
        assert_eq!(parse_present_mode("fifo"), Some(wgpu::PresentMode::Fifo));
        assert_eq!(
            parse_present_mode("FIFO_RELAXED"),
            Some(wgpu::PresentMode::FifoRelaxed)
        );
        assert_eq!(
            parse_present_mode("auto-no-vsync"),
            Some(wgpu::PresentMode::AutoNoVsync)
        );
    }

    #[test]
    fn unknown_present_mode_is_rejected() {
        assert_eq!(parse_present_mode("triple-buffer"), None);
    }
}
