//! Managed-runtime (JVM) generation backend
//!
//! On Android the platform uuid source is `java.util.UUID.randomUUID()`,
//! reached over JNI. Class and method lookup happens once, in [`bind`];
//! after that every generation call is a plain synchronous method call on
//! the calling thread's env handle.
//!
//! Threading contract: the zero-argument [`new_guid`] resolves the current
//! thread's env through the bound `JavaVM`, so the thread must already be
//! attached to the runtime. Callers on other threads attach themselves and
//! either rely on that resolution or pass their env to
//! [`new_guid_with_env`] explicitly. The backend never attaches or
//! detaches threads on the caller's behalf.

use std::sync::OnceLock;
use std::thread::ThreadId;

use jni::objects::{GlobalRef, JClass, JMethodID, JStaticMethodID};
use jni::signature::{Primitive, ReturnType};
use jni::{JNIEnv, JavaVM};
use thiserror::Error;

use xguid::{Guid, GuidSource};

/// Process-wide binding record: written once by [`bind`], read on every
/// generation call.
struct JvmBinding {
    vm: JavaVM,
    uuid_class: GlobalRef,
    random_uuid: JStaticMethodID,
    most_significant_bits: JMethodID,
    least_significant_bits: JMethodID,
    bound_thread: ThreadId,
}

static BINDING: OnceLock<JvmBinding> = OnceLock::new();

/// Errors from the one-time bind step.
///
/// Generation itself never errors; once bound, any mid-call JNI failure
/// degrades to `Guid::ZERO` like every other malformed-construction path.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("managed runtime already bound")]
    AlreadyBound,

    #[error("JNI lookup failed: {0}")]
    Lookup(#[from] jni::errors::Error),
}

impl JvmBinding {
    fn from_env(env: &mut JNIEnv) -> Result<Self, BindError> {
        let class = env.find_class("java/util/UUID")?;
        let uuid_class = env.new_global_ref(&class)?;
        let random_uuid =
            env.get_static_method_id(&class, "randomUUID", "()Ljava/util/UUID;")?;
        let most_significant_bits =
            env.get_method_id(&class, "getMostSignificantBits", "()J")?;
        let least_significant_bits =
            env.get_method_id(&class, "getLeastSignificantBits", "()J")?;

        Ok(JvmBinding {
            vm: env.get_java_vm()?,
            uuid_class,
            random_uuid,
            most_significant_bits,
            least_significant_bits,
            bound_thread: std::thread::current().id(),
        })
    }

    fn generate(&self, env: &mut JNIEnv) -> Result<Guid, jni::errors::Error> {
        let class = unsafe { JClass::from_raw(self.uuid_class.as_raw()) };
        let uuid = unsafe {
            env.call_static_method_unchecked(&class, self.random_uuid, ReturnType::Object, &[])?
        }
        .l()?;

        let hi = unsafe {
            env.call_method_unchecked(
                &uuid,
                self.most_significant_bits,
                ReturnType::Primitive(Primitive::Long),
                &[],
            )?
        }
        .j()?;
        let lo = unsafe {
            env.call_method_unchecked(
                &uuid,
                self.least_significant_bits,
                ReturnType::Primitive(Primitive::Long),
                &[],
            )?
        }
        .j()?;

        env.delete_local_ref(uuid)?;
        Ok(Guid::from_u64_pair(hi as u64, lo as u64))
    }
}

/// Bind the generation backend to the managed runtime.
///
/// Resolves `java.util.UUID` and its method ids and stores them for the
/// lifetime of the process. Must complete before any generation call;
/// calling twice fails with `AlreadyBound`.
pub fn bind(env: &mut JNIEnv) -> Result<(), BindError> {
    let binding = JvmBinding::from_env(env)?;
    tracing::debug!(thread = ?binding.bound_thread, "bound JVM uuid backend");
    BINDING.set(binding).map_err(|_| BindError::AlreadyBound)
}

/// True once [`bind`] has completed.
pub fn is_bound() -> bool {
    BINDING.get().is_some()
}

/// Generate a fresh guid through an explicit env handle.
///
/// Safe to call from any thread attached to the runtime; the handle must
/// belong to the calling thread. Unbound backend or a JNI failure
/// mid-call yields `Guid::ZERO` (any pending Java exception is cleared).
pub fn new_guid_with_env(env: &mut JNIEnv) -> Guid {
    let Some(binding) = BINDING.get() else {
        return Guid::ZERO;
    };
    match binding.generate(env) {
        Ok(guid) => guid,
        Err(_) => {
            let _ = env.exception_clear();
            Guid::ZERO
        }
    }
}

/// Generate a fresh guid using the process-wide binding.
///
/// The current thread's env is resolved through the bound `JavaVM`; the
/// caller is responsible for the thread being attached. Unbound or
/// unattached yields `Guid::ZERO`.
pub fn new_guid() -> Guid {
    let Some(binding) = BINDING.get() else {
        return Guid::ZERO;
    };
    let Ok(mut env) = binding.vm.get_env() else {
        return Guid::ZERO;
    };
    new_guid_with_env(&mut env)
}

/// `GuidSource` adapter so the managed backend plugs into the core
/// generation seam.
pub struct JvmSource<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
}

impl<'a, 'local> JvmSource<'a, 'local> {
    pub fn new(env: &'a mut JNIEnv<'local>) -> Self {
        JvmSource { env }
    }
}

impl GuidSource for JvmSource<'_, '_> {
    fn raw_guid(&mut self) -> [u8; 16] {
        new_guid_with_env(self.env).into_bytes()
    }
}
