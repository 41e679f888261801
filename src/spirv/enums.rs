//! Operand value enumerations and bitmask types.
//!
//! Single-valued operand kinds are plain enums with their wire value as the
//! discriminant; mask-valued kinds are [`bitflags`] types. Both directions
//! are covered: `from_repr`/`from_bits` on decode, the discriminant/bits on
//! encode, and a symbolic rendering for the disassembler (`IntoStaticStr`
//! for enums, [`std::fmt::Display`] for masks).

use std::fmt;

use bitflags::bitflags;
use strum::{FromRepr, IntoStaticStr};

/// Source language hint carried by `OpSource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs, non_camel_case_types)]
pub enum SourceLanguage {
    Unknown = 0,
    ESSL = 1,
    GLSL = 2,
    OpenCL_C = 3,
    OpenCL_CPP = 4,
    HLSL = 5,
}

/// Pipeline stage a function is an entry point for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum ExecutionModel {
    Vertex = 0,
    TessellationControl = 1,
    TessellationEvaluation = 2,
    Geometry = 3,
    Fragment = 4,
    GLCompute = 5,
    Kernel = 6,
}

/// Addressing model declared by `OpMemoryModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum AddressingModel {
    Logical = 0,
    Physical32 = 1,
    Physical64 = 2,
    PhysicalStorageBuffer64 = 5348,
}

/// Memory model declared by `OpMemoryModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum MemoryModel {
    Simple = 0,
    GLSL450 = 1,
    OpenCL = 2,
    Vulkan = 3,
}

/// Execution mode attached to an entry point by `OpExecutionMode`.
///
/// Several modes carry trailing literal parameters; the counts live in the
/// grammar (`grammar::enum_parameters`), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum ExecutionMode {
    Invocations = 0,
    SpacingEqual = 1,
    SpacingFractionalEven = 2,
    SpacingFractionalOdd = 3,
    VertexOrderCw = 4,
    VertexOrderCcw = 5,
    PixelCenterInteger = 6,
    OriginUpperLeft = 7,
    OriginLowerLeft = 8,
    EarlyFragmentTests = 9,
    PointMode = 10,
    Xfb = 11,
    DepthReplacing = 12,
    DepthGreater = 14,
    DepthLess = 15,
    DepthUnchanged = 16,
    LocalSize = 17,
    LocalSizeHint = 18,
    InputPoints = 19,
    InputLines = 20,
    InputLinesAdjacency = 21,
    Triangles = 22,
    InputTrianglesAdjacency = 23,
    Quads = 24,
    Isolines = 25,
    OutputVertices = 26,
    OutputPoints = 27,
    OutputLineStrip = 28,
    OutputTriangleStrip = 29,
    VecTypeHint = 30,
    ContractionOff = 31,
}

/// Storage class of a pointer type or variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum StorageClass {
    UniformConstant = 0,
    Input = 1,
    Uniform = 2,
    Output = 3,
    Workgroup = 4,
    CrossWorkgroup = 5,
    Private = 6,
    Function = 7,
    Generic = 8,
    PushConstant = 9,
    AtomicCounter = 10,
    Image = 11,
    StorageBuffer = 12,
}

/// Dimensionality of an image type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum Dim {
    #[strum(serialize = "1D")]
    Dim1D = 0,
    #[strum(serialize = "2D")]
    Dim2D = 1,
    #[strum(serialize = "3D")]
    Dim3D = 2,
    Cube = 3,
    Rect = 4,
    Buffer = 5,
    SubpassData = 6,
}

/// Texel format of an image type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum ImageFormat {
    Unknown = 0,
    Rgba32f = 1,
    Rgba16f = 2,
    R32f = 3,
    Rgba8 = 4,
    Rgba8Snorm = 5,
    Rg32f = 6,
    Rg16f = 7,
    R11fG11fB10f = 8,
    R16f = 9,
    Rgba16 = 10,
    Rgb10A2 = 11,
    Rg16 = 12,
    Rg8 = 13,
    R16 = 14,
    R8 = 15,
    Rgba16Snorm = 16,
    Rg16Snorm = 17,
    Rg8Snorm = 18,
    R16Snorm = 19,
    R8Snorm = 20,
    Rgba32i = 21,
    Rgba16i = 22,
    Rgba8i = 23,
    R32i = 24,
    Rg32i = 25,
    Rg16i = 26,
    Rg8i = 27,
    R16i = 28,
    R8i = 29,
    Rgba32ui = 30,
    Rgba16ui = 31,
    Rgba8ui = 32,
    R32ui = 33,
    Rgb10a2ui = 34,
    Rg32ui = 35,
    Rg16ui = 36,
    Rg8ui = 37,
    R16ui = 38,
    R8ui = 39,
}

/// Access qualifier for kernel image types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum AccessQualifier {
    ReadOnly = 0,
    WriteOnly = 1,
    ReadWrite = 2,
}

/// Decoration applied by `OpDecorate`/`OpMemberDecorate`.
///
/// Parameter-carrying decorations (`Location`, `BuiltIn`, ...) have their
/// trailing operand kinds defined in `grammar::enum_parameters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum Decoration {
    RelaxedPrecision = 0,
    SpecId = 1,
    Block = 2,
    BufferBlock = 3,
    RowMajor = 4,
    ColMajor = 5,
    ArrayStride = 6,
    MatrixStride = 7,
    GLSLShared = 8,
    GLSLPacked = 9,
    CPacked = 10,
    BuiltIn = 11,
    NoPerspective = 13,
    Flat = 14,
    Patch = 15,
    Centroid = 16,
    Sample = 17,
    Invariant = 18,
    Restrict = 19,
    Aliased = 20,
    Volatile = 21,
    Constant = 22,
    Coherent = 23,
    NonWritable = 24,
    NonReadable = 25,
    Uniform = 26,
    SaturatedConversion = 28,
    Stream = 29,
    Location = 30,
    Component = 31,
    Index = 32,
    Binding = 33,
    DescriptorSet = 34,
    Offset = 35,
    XfbBuffer = 36,
    XfbStride = 37,
    FuncParamAttr = 38,
    FPRoundingMode = 39,
    FPFastMathMode = 40,
    LinkageAttributes = 41,
    NoContraction = 42,
    InputAttachmentIndex = 43,
    Alignment = 44,
}

/// Built-in variable semantics, the parameter of `Decoration::BuiltIn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum BuiltIn {
    Position = 0,
    PointSize = 1,
    ClipDistance = 3,
    CullDistance = 4,
    VertexId = 5,
    InstanceId = 6,
    PrimitiveId = 7,
    InvocationId = 8,
    Layer = 9,
    ViewportIndex = 10,
    TessLevelOuter = 11,
    TessLevelInner = 12,
    TessCoord = 13,
    PatchVertices = 14,
    FragCoord = 15,
    PointCoord = 16,
    FrontFacing = 17,
    SampleId = 18,
    SamplePosition = 19,
    SampleMask = 20,
    FragDepth = 22,
    HelperInvocation = 23,
    NumWorkgroups = 24,
    WorkgroupSize = 25,
    WorkgroupId = 26,
    LocalInvocationId = 27,
    GlobalInvocationId = 28,
    LocalInvocationIndex = 29,
    WorkDim = 30,
    GlobalSize = 31,
    EnqueuedWorkgroupSize = 32,
    GlobalOffset = 33,
    GlobalLinearId = 34,
    SubgroupSize = 36,
    SubgroupMaxSize = 37,
    NumSubgroups = 38,
    NumEnqueuedSubgroups = 39,
    SubgroupId = 40,
    SubgroupLocalInvocationId = 41,
    VertexIndex = 42,
    InstanceIndex = 43,
}

/// Capability declared by `OpCapability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum Capability {
    Matrix = 0,
    Shader = 1,
    Geometry = 2,
    Tessellation = 3,
    Addresses = 4,
    Linkage = 5,
    Kernel = 6,
    Vector16 = 7,
    Float16Buffer = 8,
    Float16 = 9,
    Float64 = 10,
    Int64 = 11,
    Int64Atomics = 12,
    ImageBasic = 13,
    ImageReadWrite = 14,
    ImageMipmap = 15,
    Pipes = 17,
    Groups = 18,
    DeviceEnqueue = 19,
    LiteralSampler = 20,
    AtomicStorage = 21,
    Int16 = 22,
    TessellationPointSize = 23,
    GeometryPointSize = 24,
    ImageGatherExtended = 25,
    StorageImageMultisample = 27,
    UniformBufferArrayDynamicIndexing = 28,
    SampledImageArrayDynamicIndexing = 29,
    StorageBufferArrayDynamicIndexing = 30,
    StorageImageArrayDynamicIndexing = 31,
    ClipDistance = 32,
    CullDistance = 33,
    ImageCubeArray = 34,
    SampleRateShading = 35,
    ImageRect = 36,
    SampledRect = 37,
    GenericPointer = 38,
    Int8 = 39,
    InputAttachment = 40,
    SparseResidency = 41,
    MinLod = 42,
    Sampled1D = 43,
    Image1D = 44,
    SampledCubeArray = 45,
    SampledBuffer = 46,
    ImageBuffer = 47,
    ImageMSArray = 48,
    StorageImageExtendedFormats = 49,
    ImageQuery = 50,
    DerivativeControl = 51,
    InterpolationFunction = 52,
    TransformFeedback = 53,
    GeometryStreams = 54,
    StorageImageReadWithoutFormat = 55,
    StorageImageWriteWithoutFormat = 56,
    MultiViewport = 57,
}

bitflags! {
    /// Function control mask on `OpFunction`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FunctionControl: u32 {
        /// Strong inlining hint
        const INLINE = 0x1;
        /// Suppress inlining
        const DONT_INLINE = 0x2;
        /// No side effects beyond its results
        const PURE = 0x4;
        /// Result depends only on the arguments
        const CONST = 0x8;
    }
}

bitflags! {
    /// Selection control mask on `OpSelectionMerge`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SelectionControl: u32 {
        /// Flatten the selection
        const FLATTEN = 0x1;
        /// Keep the selection branchy
        const DONT_FLATTEN = 0x2;
    }
}

bitflags! {
    /// Loop control mask on `OpLoopMerge`.
    ///
    /// `DEPENDENCY_LENGTH` carries a trailing literal parameter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LoopControl: u32 {
        /// Unroll the loop
        const UNROLL = 0x1;
        /// Keep the loop rolled
        const DONT_UNROLL = 0x2;
        /// No loop-carried dependencies
        const DEPENDENCY_INFINITE = 0x4;
        /// Loop-carried dependency distance follows as a literal
        const DEPENDENCY_LENGTH = 0x8;
    }
}

bitflags! {
    /// Memory access mask on `OpLoad`/`OpStore`/`OpCopyMemory`.
    ///
    /// `ALIGNED` carries a trailing literal alignment parameter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MemoryAccess: u32 {
        /// Volatile access
        const VOLATILE = 0x1;
        /// Alignment literal follows
        const ALIGNED = 0x2;
        /// Non-temporal access
        const NONTEMPORAL = 0x4;
    }
}

bitflags! {
    /// Image operand mask on the image sample/fetch/read/write instructions.
    ///
    /// Each set bit appends id parameters in ascending bit order; `GRAD`
    /// appends two, the rest one each.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ImageOperands: u32 {
        /// Lod bias id follows
        const BIAS = 0x01;
        /// Explicit lod id follows
        const LOD = 0x02;
        /// Explicit x/y gradient ids follow
        const GRAD = 0x04;
        /// Constant offset id follows
        const CONST_OFFSET = 0x08;
        /// Offset id follows
        const OFFSET = 0x10;
        /// Constant offsets array id follows
        const CONST_OFFSETS = 0x20;
        /// Sample index id follows
        const SAMPLE = 0x40;
        /// Minimum lod id follows
        const MIN_LOD = 0x80;
    }
}

fn fmt_mask(
    f: &mut fmt::Formatter<'_>,
    bits: u32,
    names: &[(u32, &'static str)],
) -> fmt::Result {
    if bits == 0 {
        return write!(f, "None");
    }

    let mut first = true;
    for (bit, name) in names {
        if bits & bit != 0 {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{name}")?;
            first = false;
        }
    }
    Ok(())
}

impl fmt::Display for FunctionControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_mask(
            f,
            self.bits(),
            &[
                (0x1, "Inline"),
                (0x2, "DontInline"),
                (0x4, "Pure"),
                (0x8, "Const"),
            ],
        )
    }
}

impl fmt::Display for SelectionControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_mask(f, self.bits(), &[(0x1, "Flatten"), (0x2, "DontFlatten")])
    }
}

impl fmt::Display for LoopControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_mask(
            f,
            self.bits(),
            &[
                (0x1, "Unroll"),
                (0x2, "DontUnroll"),
                (0x4, "DependencyInfinite"),
                (0x8, "DependencyLength"),
            ],
        )
    }
}

impl fmt::Display for MemoryAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_mask(
            f,
            self.bits(),
            &[(0x1, "Volatile"), (0x2, "Aligned"), (0x4, "Nontemporal")],
        )
    }
}

impl fmt::Display for ImageOperands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_mask(
            f,
            self.bits(),
            &[
                (0x01, "Bias"),
                (0x02, "Lod"),
                (0x04, "Grad"),
                (0x08, "ConstOffset"),
                (0x10, "Offset"),
                (0x20, "ConstOffsets"),
                (0x40, "Sample"),
                (0x80, "MinLod"),
            ],
        )
    }
}
