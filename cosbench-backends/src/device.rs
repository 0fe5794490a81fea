//! GPU Device Backend
//!
//! Upload the input to a device-resident storage buffer, drain the queue,
//! run an elementwise-cosine compute shader, drain the queue again, then map
//! a staging buffer and copy the result back to host memory. The two
//! `poll(Maintain::Wait)` barriers keep asynchronous dispatch latency and
//! queue drain out of the timed window.

use std::mem::{size_of, size_of_val};

use cosbench_core::{BackendError, ComputeBackend};
use wgpu::util::DeviceExt;

/// Threads per workgroup for the cosine kernel.
pub const WORKGROUP_SIZE: u32 = 64;

const COSINE_SHADER: &str = r#"
@group(0) @binding(0)
var<storage, read> input: array<f32>;

@group(0) @binding(1)
var<storage, read_write> output: array<f32>;

@compute @workgroup_size(64)
fn main(@builtin(global_invocation_id) global_id: vec3<u32>) {
    let i = global_id.x;
    if (i >= arrayLength(&input)) {
        return;
    }
    output[i] = cos(input[i]);
}
"#;

/// GPU-resident elementwise cosine.
pub struct DeviceBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::ComputePipeline,
}

impl DeviceBackend {
    /// Acquire an adapter, a device/queue pair and the compiled pipeline.
    ///
    /// Fails with `NoAdapter` when the machine has no usable GPU backend.
    pub fn new() -> Result<Self, BackendError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            dx12_shader_compiler: Default::default(),
        });

        let adapter =
            pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))
                .ok_or(BackendError::NoAdapter)?;

        let info = adapter.get_info();
        tracing::debug!(adapter = %info.name, backend = ?info.backend, "acquired GPU adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: None,
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::downlevel_defaults(),
            },
            None,
        ))
        .map_err(|e| BackendError::DeviceRequest(e.to_string()))?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cosine"),
            source: wgpu::ShaderSource::Wgsl(COSINE_SHADER.into()),
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("cosine"),
            layout: None,
            module: &module,
            entry_point: "main",
        });

        Ok(Self {
            device,
            queue,
            pipeline,
        })
    }
}

impl ComputeBackend for DeviceBackend {
    fn label(&self) -> &'static str {
        "device"
    }

    fn compute(&self, input: &[f32]) -> Result<Vec<f32>, BackendError> {
        // wgpu rejects zero-sized storage bindings; nothing to dispatch anyway.
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let byte_len = size_of_val(input) as wgpu::BufferAddress;

        let input_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("input"),
                contents: slice_as_bytes(input),
                usage: wgpu::BufferUsages::STORAGE,
            });

        let output_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("output"),
            size: byte_len,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let staging_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("staging"),
            size: byte_len,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Barrier one: the upload drains before the kernel is dispatched.
        self.queue.submit(None);
        self.device.poll(wgpu::Maintain::Wait);

        let bind_group_layout = self.pipeline.get_bind_group_layout(0);
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: None,
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: input_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: output_buffer.as_entire_binding(),
                },
            ],
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        {
            let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor { label: None });
            cpass.set_pipeline(&self.pipeline);
            cpass.set_bind_group(0, &bind_group, &[]);

            let workgroups = (input.len() as u32).div_ceil(WORKGROUP_SIZE);
            cpass.dispatch_workgroups(workgroups, 1, 1);
        }
        encoder.copy_buffer_to_buffer(&output_buffer, 0, &staging_buffer, 0, byte_len);
        self.queue.submit(Some(encoder.finish()));

        // Barrier two: the kernel and the device-side copy complete here.
        self.device.poll(wgpu::Maintain::Wait);

        // Copy back to host memory through the mapped staging buffer.
        let slice = staging_buffer.slice(..);
        let (sender, receiver) = futures_intrusive::channel::shared::oneshot_channel();
        slice.map_async(wgpu::MapMode::Read, move |v| {
            let _ = sender.send(v);
        });

        self.device.poll(wgpu::Maintain::Wait);

        match pollster::block_on(receiver.receive()) {
            Some(Ok(())) => {}
            _ => return Err(BackendError::DeviceRead("buffer mapping failed".into())),
        }

        let data = slice.get_mapped_range();
        let output = bytes_as_f32(&data).to_vec();
        drop(data);
        staging_buffer.unmap();

        Ok(output)
    }
}

fn slice_as_bytes(values: &[f32]) -> &[u8] {
    // SAFETY: f32 has no padding and any bit pattern is a valid byte.
    unsafe { std::slice::from_raw_parts(values.as_ptr().cast(), size_of_val(values)) }
}

fn bytes_as_f32(bytes: &[u8]) -> &[f32] {
    // SAFETY: the staging buffer holds exactly the f32 array the kernel
    // wrote; wgpu mapped ranges are aligned well past 4 bytes.
    unsafe { std::slice::from_raw_parts(bytes.as_ptr().cast(), bytes.len() / size_of::<f32>()) }
}
